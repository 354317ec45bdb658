pub mod layout;
pub mod props;
