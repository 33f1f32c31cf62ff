use std::process::Command;

fn main() {
    // The dashboard bundle only makes sense compiled to wasm; surface a
    // missing target early instead of failing deep inside wasm-bindgen.
    let installed = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .map(|out| String::from_utf8_lossy(&out.stdout).into_owned())
        .unwrap_or_default();
    if !installed.lines().any(|line| line.trim() == "wasm32-unknown-unknown") {
        println!(
            "cargo:warning=wasm32-unknown-unknown target not installed; \
             run `rustup target add wasm32-unknown-unknown` to build the dashboard bundle"
        );
    }
}
