pub mod http_bokun_client;
pub mod signer;
