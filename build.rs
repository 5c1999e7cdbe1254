use std::process::Command;

/// Run `git rev-parse` with the given extra args, falling back to "unknown"
/// outside a checkout (e.g. when building from a published crate).
fn git_rev(args: &[&str]) -> String {
    let output = Command::new("git").arg("rev-parse").args(args).output();

    match output {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(&["HEAD"]));

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
