use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WobbleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(WobbleError::asset("x").to_string().contains("asset error:"));
    assert!(
        WobbleError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        WobbleError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WobbleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
