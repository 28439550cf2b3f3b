fn main() {
    // ESP-IDF link/sysroot hints are only meaningful when the espidf
    // feature is active; host builds (lib + tests) have nothing to emit.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
