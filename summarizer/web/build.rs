use std::process::Command;

fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");

	let server_url = std::env::var("SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
	println!("cargo:rustc-env=SERVER_URL={}", server_url);
	println!("cargo:rerun-if-env-changed=SERVER_URL");

	println!("cargo:rerun-if-changed=./input.css");
	println!("cargo:rerun-if-changed=./tailwind.config.js");

	// styles only matter for the browser build
	if std::env::var("CARGO_CFG_TARGET_ARCH").as_deref() != Ok("wasm32") {
		return;
	}

	let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
	let mut args = vec!["tailwindcss", "-i", "./input.css", "-o", "./assets/tailwind.css"];
	if profile == "release" {
		args.push("--minify");
	}

	// the page still works unstyled, so a missing toolchain only warns
	match Command::new("npx").args(&args).output() {
		Ok(output) if output.status.success() => {},
		Ok(output) => println!("cargo:warning=Tailwind CSS compilation failed: {}", String::from_utf8_lossy(&output.stderr)),
		Err(e) => println!("cargo:warning=Skipping Tailwind CSS compilation: {e}"),
	}
}
