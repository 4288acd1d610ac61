use rand::RngCore;

/// Name of the cookie carrying the anonymous visitor id.
pub const VISITOR_COOKIE: &str = "visitor_id";

pub fn random_visitor_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex::encode(b)
}
