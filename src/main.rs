//! Trunk binary entry point. Without the `csr` feature this is a no-op so
//! host builds and tests stay browser-free.

fn main() {
    #[cfg(feature = "csr")]
    scangrid_shell::start();
}
