pub mod cdn;
pub mod resources;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
