fn main() {
    // Tauri build will embed Windows resources (icons) if RC.EXE is available.
    tauri_build::build()
}
