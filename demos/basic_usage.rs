use branca::{Branca, Error, Key};

fn main() {
    // Secret key, normally read from configuration
    let key: Key = "73757065727365637265746b6579796f7573686f756c646e6f74636f6d6d6974"
        .parse()
        .expect("Invalid key");

    let branca = Branca::builder(key).ttl(3600).build();

    let string_token = create_token(&branca, b"user:1234");
    let binary_token = create_token(&branca, &[0x00, 0x01, 0x02, 0xFF]);
    let empty_token = create_token(&branca, b"");

    println!("Token with string payload is {} characters", string_token.len());
    println!("Token with binary payload is {} characters", binary_token.len());
    println!("Token with empty payload is {} characters", empty_token.len());

    verify_token(&branca, &string_token);
    verify_token(&branca, &binary_token);
    verify_token(&branca, &empty_token);

    // Tampered and foreign tokens all fail the same way
    let mut tampered = string_token.clone();
    tampered.pop();
    tampered.push('0');
    verify_token(&branca, &tampered);

    let other = Branca::new(Key::generate());
    verify_token(&other, &string_token);
}

/// Create a token stamped with the current time
fn create_token(branca: &Branca, payload: &[u8]) -> String {
    branca.encode(payload).expect("Failed to encode token")
}

/// Decode a token and report what it contains
fn verify_token(branca: &Branca, token: &str) {
    match branca.decode(token) {
        Ok(decoded) => {
            println!("Token is valid, created at {}", decoded.timestamp());
            match decoded.payload_str() {
                Some(text) => println!("  payload: {text:?}"),
                None => println!("  payload: {:02x?}", decoded.payload()),
            }
        }
        Err(Error::InvalidToken) => println!("Token is invalid"),
        Err(e) => println!("Unexpected error: {e}"),
    }
}
