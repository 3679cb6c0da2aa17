fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // ESP-IDF environment (linker args, sdkconfig) is only needed for
    // device builds; host builds for tests skip it entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
