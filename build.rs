fn main() {
    // Only the firmware binary is linked for the board.
    if std::env::var_os("CARGO_FEATURE_STM32").is_some() {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
