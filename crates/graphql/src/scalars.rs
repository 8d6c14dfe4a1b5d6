//! Custom GraphQL scalars.

use {
    async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value},
    vidgraph_patch::CustomScalar,
    vidgraph_service_traits::Timestamp as EpochTimestamp,
};

#[derive(Debug, thiserror::Error)]
enum ScalarError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unsupported value type")]
    UnsupportedValueType,
}

/// A JSON scalar that passes through arbitrary `serde_json::Value` data.
///
/// Carries the `changes` map of update mutations, whose shape depends on the
/// entity being patched.
#[derive(Debug)]
pub struct Json(pub serde_json::Value);

#[Scalar]
impl ScalarType for Json {
    fn parse(value: Value) -> InputValueResult<Self> {
        let json = gql_value_to_json(value).map_err(InputValueError::custom)?;
        Ok(Json(json))
    }

    fn to_value(&self) -> Value {
        json_to_gql_value(&self.0)
    }
}

/// An instant rendered as an RFC 3339 string.
///
/// Input accepts the same forms as a patched `createdAt` field: an RFC 3339
/// string or an integer epoch.
#[derive(Debug)]
pub struct Timestamp(pub EpochTimestamp);

#[Scalar(name = "Timestamp")]
impl ScalarType for Timestamp {
    fn parse(value: Value) -> InputValueResult<Self> {
        let json = gql_value_to_json(value).map_err(InputValueError::custom)?;
        EpochTimestamp::decode(&json)
            .map(Timestamp)
            .map_err(InputValueError::custom)
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_rfc3339())
    }
}

impl From<EpochTimestamp> for Timestamp {
    fn from(value: EpochTimestamp) -> Self {
        Self(value)
    }
}

fn gql_value_to_json(v: Value) -> Result<serde_json::Value, ScalarError> {
    match v {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Number(n) => Ok(serde_json::to_value(n)?),
        Value::String(s) => Ok(serde_json::Value::String(s)),
        Value::Boolean(b) => Ok(serde_json::Value::Bool(b)),
        Value::List(l) => {
            let items: Result<Vec<serde_json::Value>, _> =
                l.into_iter().map(gql_value_to_json).collect();
            Ok(serde_json::Value::Array(items?))
        },
        Value::Object(m) => {
            let map: Result<serde_json::Map<String, serde_json::Value>, _> = m
                .into_iter()
                .map(|(k, v)| gql_value_to_json(v).map(|jv| (k.to_string(), jv)))
                .collect();
            Ok(serde_json::Value::Object(map?))
        },
        _ => Err(ScalarError::UnsupportedValueType),
    }
}

fn json_to_gql_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(f) = n.as_f64() {
                Value::Number(async_graphql::Number::from_f64(f).unwrap_or_else(|| 0i32.into()))
            } else {
                Value::Null
            }
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(a) => Value::List(a.iter().map(json_to_gql_value).collect()),
        serde_json::Value::Object(m) => {
            let map: async_graphql::indexmap::IndexMap<async_graphql::Name, Value> = m
                .iter()
                .map(|(k, v)| (async_graphql::Name::new(k), json_to_gql_value(v)))
                .collect();
            Value::Object(map)
        },
    }
}
