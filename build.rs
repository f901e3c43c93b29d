fn main() {
    // Propagates ESP-IDF toolchain/linker configuration when building for
    // the device; a no-op for host-target builds.
    embuild::espidf::sysenv::output();
}
