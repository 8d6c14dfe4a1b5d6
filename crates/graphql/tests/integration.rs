//! Integration tests for the vidgraph-graphql crate.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use {
    async_graphql::{Request, Response, Variables},
    serde_json::{Value, json},
    vidgraph_graphql::{SchemaOptions, VidgraphSchema, build_schema, build_schema_with},
    vidgraph_service_traits::{
        EntityManager, NewUser, ServiceResult, Services, User, UserManager,
    },
    vidgraph_store::{InMemoryStore, InMemoryUserManager, InMemoryVideoManager, Seed},
};

// ── Fixtures ────────────────────────────────────────────────────────────────

fn seed() -> Seed {
    serde_json::from_value(json!({
        "users": [
            { "id": "u1", "name": "Alice", "email": "alice@example.com", "age": 30,
              "profile": { "bio": "hello" }, "createdAt": "2023-06-01T12:00:00Z" },
            { "id": "u2", "name": "Bob", "email": "bob@example.com",
              "createdAt": "2023-07-01T12:00:00Z" }
        ],
        "videos": [
            { "id": "v1", "key": "intro", "title": "Intro", "uploaderId": "u1",
              "tags": ["welcome"], "createdAt": 1_690_000_000 }
        ]
    }))
    .expect("seed")
}

async fn seeded_schema() -> VidgraphSchema {
    let store = InMemoryStore::from_seed(seed()).await.expect("seeded store");
    build_schema(store.services())
}

async fn run(schema: &VidgraphSchema, query: &str) -> Response {
    schema.execute(Request::new(query)).await
}

fn data(res: Response) -> Value {
    assert!(res.errors.is_empty(), "errors: {:?}", res.errors);
    res.data.into_json().expect("json")
}

fn error_code(res: &Response) -> String {
    assert!(!res.errors.is_empty(), "expected an error");
    let ext = res.errors[0].extensions.as_ref().expect("extensions");
    match ext.get("code") {
        Some(async_graphql::Value::String(code)) => code.clone(),
        other => panic!("no code: {other:?}"),
    }
}

/// User manager that counts `update` calls on top of the in-memory one.
struct CountingUsers {
    inner: InMemoryUserManager,
    updates: AtomicUsize,
}

#[async_trait::async_trait]
impl EntityManager<User> for CountingUsers {
    async fn find(&self, id: &str) -> ServiceResult<User> {
        self.inner.find(id).await
    }

    async fn update(&self, entity: User) -> ServiceResult<User> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(entity).await
    }

    async fn delete(&self, id: &str) -> ServiceResult<User> {
        self.inner.delete(id).await
    }

    async fn list(&self) -> ServiceResult<Vec<User>> {
        self.inner.list().await
    }
}

#[async_trait::async_trait]
impl UserManager for CountingUsers {
    async fn create(&self, input: NewUser) -> ServiceResult<User> {
        self.inner.create(input).await
    }
}

async fn counting_schema() -> (VidgraphSchema, Arc<CountingUsers>) {
    let users = Arc::new(CountingUsers {
        inner: InMemoryUserManager::new(),
        updates: AtomicUsize::new(0),
    });
    for user in seed().users {
        users.inner.insert(user).await.expect("insert");
    }
    let videos = Arc::new(InMemoryVideoManager::new(users.clone()));
    let services = Arc::new(Services {
        users: users.clone(),
        videos,
    });
    (build_schema(services), users)
}

// ── Schema shape ────────────────────────────────────────────────────────────

#[tokio::test]
async fn introspection_returns_roots() {
    let schema = seeded_schema().await;
    let data = data(
        run(
            &schema,
            "{ __schema { queryType { name } mutationType { name } subscriptionType { name } } }",
        )
        .await,
    );
    assert_eq!(data["__schema"]["queryType"]["name"], "QueryRoot");
    assert_eq!(data["__schema"]["mutationType"]["name"], "MutationRoot");
    assert!(data["__schema"]["subscriptionType"].is_null());
}

#[tokio::test]
async fn introspection_lists_mutations() {
    let schema = seeded_schema().await;
    let data = data(run(&schema, r#"{ __type(name: "MutationRoot") { fields { name } } }"#).await);
    let fields: Vec<&str> = data["__type"]["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|f| f["name"].as_str().expect("name"))
        .collect();
    for expected in [
        "createUser",
        "updateUser",
        "deleteUser",
        "createVideo",
        "updateVideo",
        "deleteVideo",
    ] {
        assert!(fields.contains(&expected), "missing {expected}: {fields:?}");
    }
}

#[tokio::test]
async fn introspection_can_be_disabled() {
    let store = InMemoryStore::from_seed(seed()).await.expect("store");
    let schema = build_schema_with(
        store.services(),
        &SchemaOptions {
            introspection: false,
            ..SchemaOptions::default()
        },
    );
    let data = data(run(&schema, "{ __schema { queryType { name } } }").await);
    assert!(data["__schema"].is_null());

    let data = self::data(run(&schema, "{ users { id } }").await);
    assert_eq!(data["users"][0]["id"], "u1");
}

#[tokio::test]
async fn depth_limit_rejects_deep_queries() {
    let store = InMemoryStore::from_seed(seed()).await.expect("store");
    let schema = build_schema_with(
        store.services(),
        &SchemaOptions {
            max_depth: Some(2),
            ..SchemaOptions::default()
        },
    );
    let res = run(&schema, "{ videos { uploader { profile { bio } } } }").await;
    assert!(!res.errors.is_empty());
    let res = run(&schema, "{ videos { key } }").await;
    assert!(res.errors.is_empty(), "errors: {:?}", res.errors);
}

// ── Queries ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn users_query_lists_oldest_first() {
    let schema = seeded_schema().await;
    let data = data(run(&schema, "{ users { id name age createdAt } }").await);
    assert_eq!(data["users"][0]["id"], "u1");
    assert_eq!(data["users"][0]["createdAt"], "2023-06-01T12:00:00Z");
    assert_eq!(data["users"][1]["name"], "Bob");
    assert!(data["users"][1]["age"].is_null());
}

#[tokio::test]
async fn video_by_key_resolves_uploader() {
    let schema = seeded_schema().await;
    let data = data(
        run(
            &schema,
            r#"{ videoByKey(key: "intro") { id createdAt tags uploader { name profile { bio } } } }"#,
        )
        .await,
    );
    let video = &data["videoByKey"];
    assert_eq!(video["id"], "v1");
    assert_eq!(video["createdAt"], 1_690_000_000);
    assert_eq!(video["tags"], json!(["welcome"]));
    assert_eq!(video["uploader"]["name"], "Alice");
    assert_eq!(video["uploader"]["profile"]["bio"], "hello");
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let schema = seeded_schema().await;
    let res = run(&schema, r#"{ user(id: "nobody") { id } }"#).await;
    assert_eq!(error_code(&res), "NOT_FOUND");
    assert!(res.errors[0].message.contains("nobody"));
}

// ── Updates ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_user_sets_only_named_fields() {
    let schema = seeded_schema().await;
    let data = data(
        run(
            &schema,
            r#"mutation { updateUser(id: "u1", changes: { age: 31 }) {
                id name email age profile { bio } createdAt } }"#,
        )
        .await,
    );
    assert_eq!(
        data["updateUser"],
        json!({
            "id": "u1",
            "name": "Alice",
            "email": "alice@example.com",
            "age": 31,
            "profile": { "bio": "hello" },
            "createdAt": "2023-06-01T12:00:00Z",
        })
    );
}

#[tokio::test]
async fn update_is_persisted() {
    let schema = seeded_schema().await;
    data(run(&schema, r#"mutation { updateUser(id: "u2", changes: { name: "Robert" }) { id } }"#).await);
    let data = data(run(&schema, r#"{ user(id: "u2") { name email } }"#).await);
    assert_eq!(data["user"]["name"], "Robert");
    assert_eq!(data["user"]["email"], "bob@example.com");
}

#[tokio::test]
async fn update_video_decodes_timestamp_to_epoch() {
    let schema = seeded_schema().await;
    let data = data(
        run(
            &schema,
            r#"mutation { updateVideo(id: "v1", changes: { createdAt: "2024-01-01T00:00:00Z" }) {
                key createdAt } }"#,
        )
        .await,
    );
    assert_eq!(data["updateVideo"]["key"], "intro");
    assert_eq!(data["updateVideo"]["createdAt"], 1_704_067_200);
}

#[tokio::test]
async fn changes_can_come_from_variables() {
    let schema = seeded_schema().await;
    let request = Request::new(
        "mutation($id: ID!, $changes: Json!) { updateUser(id: $id, changes: $changes) { profile { bio avatarUrl } } }",
    )
    .variables(Variables::from_json(json!({
        "id": "u1",
        "changes": { "profile": { "avatarUrl": "https://img.example/a.png" } },
    })));
    let data = data(schema.execute(request).await);
    assert_eq!(data["updateUser"]["profile"]["bio"], "hello");
    assert_eq!(
        data["updateUser"]["profile"]["avatarUrl"],
        "https://img.example/a.png"
    );
}

#[tokio::test]
async fn unknown_field_is_rejected_and_nothing_changes() {
    let schema = seeded_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateUser(id: "u1", changes: { age: 40, unknownField: 1 }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "UNKNOWN_FIELD");

    let data = data(run(&schema, r#"{ user(id: "u1") { age } }"#).await);
    assert_eq!(data["user"]["age"], 30);
}

#[tokio::test]
async fn id_is_not_patchable() {
    let schema = seeded_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateVideo(id: "v1", changes: { id: "v9" }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "UNKNOWN_FIELD");
}

#[tokio::test]
async fn bad_timestamp_is_decode_failed_and_nothing_changes() {
    let schema = seeded_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateVideo(id: "v1", changes: { title: "New", createdAt: "next week" }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "DECODE_FAILED");

    let data = data(run(&schema, r#"{ video(id: "v1") { title createdAt } }"#).await);
    assert_eq!(data["video"]["title"], "Intro");
    assert_eq!(data["video"]["createdAt"], 1_690_000_000);
}

#[tokio::test]
async fn wrong_value_type_is_type_mismatch() {
    let schema = seeded_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateUser(id: "u1", changes: { age: "thirty" }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "TYPE_MISMATCH");
    assert_eq!(res.errors[0].message, "field `age` expects a value of type Int");

    let res = run(
        &schema,
        r#"mutation { updateVideo(id: "v1", changes: { tags: "solo" }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "TYPE_MISMATCH");
    assert_eq!(res.errors[0].message, "field `tags` expects a value of type [String!]");
}

#[tokio::test]
async fn out_of_range_epoch_is_rejected_and_rendered_values_decode_back() {
    let schema = seeded_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateUser(id: "u1", changes: { createdAt: 9223372036854775807 }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "DECODE_FAILED");

    let set = data(
        run(
            &schema,
            r#"mutation { updateUser(id: "u1", changes: { createdAt: 253402300799 }) { createdAt } }"#,
        )
        .await,
    );
    let rendered = set["updateUser"]["createdAt"].as_str().expect("rendered").to_string();
    assert_eq!(rendered, "9999-12-31T23:59:59Z");

    let echoed = data(
        run(
            &schema,
            &format!(
                r#"mutation {{ updateUser(id: "u1", changes: {{ createdAt: "{rendered}" }}) {{ createdAt }} }}"#
            ),
        )
        .await,
    );
    assert_eq!(echoed["updateUser"]["createdAt"], rendered.as_str());
}

#[tokio::test]
async fn non_object_changes_are_type_mismatch() {
    let schema = seeded_schema().await;
    let res = run(&schema, r#"mutation { updateUser(id: "u1", changes: [1, 2]) { id } }"#).await;
    assert_eq!(error_code(&res), "TYPE_MISMATCH");
}

#[tokio::test]
async fn manager_validation_runs_after_merge() {
    let schema = seeded_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateUser(id: "u1", changes: { email: "not-an-email" }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "VALIDATION");

    let data = data(run(&schema, r#"{ user(id: "u1") { email } }"#).await);
    assert_eq!(data["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn update_on_missing_id_never_persists() {
    let (schema, users) = counting_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateUser(id: "ghost", changes: { age: 31 }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "NOT_FOUND");
    assert_eq!(users.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rejected_patch_never_persists() {
    let (schema, users) = counting_schema().await;
    let res = run(
        &schema,
        r#"mutation { updateUser(id: "u1", changes: { nope: true }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "UNKNOWN_FIELD");
    assert_eq!(users.updates.load(Ordering::SeqCst), 0);

    data(run(&schema, r#"mutation { updateUser(id: "u1", changes: { age: 31 }) { id } }"#).await);
    assert_eq!(users.updates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn same_patch_twice_is_idempotent() {
    let schema = seeded_schema().await;
    let mutation = r#"mutation { updateUser(id: "u2", changes: { age: 44, profile: { bio: "hi" } }) {
        name email age profile { bio avatarUrl } createdAt } }"#;
    let first = data(run(&schema, mutation).await);
    let second = data(run(&schema, mutation).await);
    assert_eq!(first, second);
}

// ── Create / delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_delete_video() {
    let schema = seeded_schema().await;
    let created = data(
        run(
            &schema,
            r#"mutation { createVideo(input: { key: "outro", title: "Outro", uploaderId: "u2" }) {
                id key tags uploader { id } } }"#,
        )
        .await,
    );
    assert_eq!(created["createVideo"]["key"], "outro");
    assert_eq!(created["createVideo"]["tags"], json!([]));
    assert_eq!(created["createVideo"]["uploader"]["id"], "u2");
    let id = created["createVideo"]["id"].as_str().expect("id").to_string();

    let deleted = data(run(&schema, &format!(r#"mutation {{ deleteVideo(id: "{id}") {{ key }} }}"#)).await);
    assert_eq!(deleted["deleteVideo"]["key"], "outro");

    let res = run(&schema, r#"{ videoByKey(key: "outro") { id } }"#).await;
    assert_eq!(error_code(&res), "NOT_FOUND");
}

#[tokio::test]
async fn create_video_with_taken_key_conflicts() {
    let schema = seeded_schema().await;
    let res = run(
        &schema,
        r#"mutation { createVideo(input: { key: "intro", title: "Again", uploaderId: "u1" }) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&res), "CONFLICT");
}

#[tokio::test]
async fn create_user_applies_defaults() {
    let schema = seeded_schema().await;
    let data = data(
        run(
            &schema,
            r#"mutation { createUser(input: { name: "Cleo", email: "cleo@example.com" }) {
                name age profile { bio avatarUrl } } }"#,
        )
        .await,
    );
    assert_eq!(
        data["createUser"],
        json!({ "name": "Cleo", "age": null, "profile": { "bio": null, "avatarUrl": null } })
    );
}

#[tokio::test]
async fn delete_missing_user_is_not_found() {
    let schema = seeded_schema().await;
    let res = run(&schema, r#"mutation { deleteUser(id: "ghost") { id } }"#).await;
    assert_eq!(error_code(&res), "NOT_FOUND");
}
