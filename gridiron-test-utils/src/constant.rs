/// Subject id used for the default test league owner.
pub const TEST_USER_ID: &str = "auth0|abc123";

/// Public base URL baked into test configuration.
pub const TEST_PUBLIC_APP_URL: &str = "https://gridiron.example.com";
