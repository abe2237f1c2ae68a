use garde::Validate;
use kernel::model::list::ListOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
pub struct ListQuery {
    #[garde(range(min = 0))]
    #[serde(default)]
    pub skip: i64,
    #[garde(range(min = 1, max = 1000))]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub(crate) fn default_limit() -> i64 {
    100
}

impl From<ListQuery> for ListOptions {
    fn from(value: ListQuery) -> Self {
        let ListQuery { skip, limit } = value;
        Self { skip, limit }
    }
}
