use chrono::Utc;
use rand::Rng;

// Record id
//------------------------------------------------------------------------------

/// Generates a compact, practically unique id for history records. The
/// current unix milliseconds keep ids sortable by creation time; the random
/// suffix breaks ties within the same millisecond.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let millis = Utc::now().timestamp_millis() as u64;
    let salt: u64 = rng.random();
    let mut id = to_base36(millis);
    id.push_str(&to_base36(salt));
    id
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}
