fn main() {
    #[cfg(target_arch = "wasm32")]
    gesang_absensi_frontend::run();
}
