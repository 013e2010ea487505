pub mod domain;
pub mod enums;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;
