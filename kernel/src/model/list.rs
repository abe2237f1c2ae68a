/// Offset/limit pagination applied to every list operation of the stores.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub skip: i64,
    pub limit: i64,
}
