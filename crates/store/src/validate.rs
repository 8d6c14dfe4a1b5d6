//! Business rules checked on every write.

use vidgraph_service_traits::{ServiceError, ServiceResult, User, Video};

const MAX_AGE: i32 = 150;

pub(crate) fn user(user: &User) -> ServiceResult<()> {
    if user.name.trim().is_empty() {
        return Err(ServiceError::validation("user", "name must not be empty"));
    }
    if !user.email.contains('@') {
        return Err(ServiceError::validation(
            "user",
            format!("`{}` is not an email address", user.email),
        ));
    }
    if let Some(age) = user.age
        && !(0..=MAX_AGE).contains(&age)
    {
        return Err(ServiceError::validation(
            "user",
            format!("age {age} is outside 0..={MAX_AGE}"),
        ));
    }
    Ok(())
}

pub(crate) fn video(video: &Video) -> ServiceResult<()> {
    if video.key.is_empty() || video.key.chars().any(char::is_whitespace) {
        return Err(ServiceError::validation(
            "video",
            format!("key `{}` must be non-empty and contain no whitespace", video.key),
        ));
    }
    if video.title.trim().is_empty() {
        return Err(ServiceError::validation("video", "title must not be empty"));
    }
    Ok(())
}
