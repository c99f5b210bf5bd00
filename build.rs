//! Forwards `EXPEDITE_*` entries from an optional `.env` file to the compiler
//! so `AppConfig::from_build_env` can read them through `option_env!`.

const PREFIX: &str = "EXPEDITE_";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let Ok(entries) = dotenvy::from_filename_iter(".env") else {
        return;
    };

    for entry in entries {
        let Ok((key, value)) = entry else {
            println!("cargo:warning=skipping unparseable .env line");
            continue;
        };
        if !key.starts_with(PREFIX) {
            continue;
        }
        // Real environment wins over the file.
        if std::env::var_os(&key).is_some() {
            continue;
        }
        println!("cargo:rustc-env={key}={value}");
    }

    for key in [
        "EXPEDITE_ID_TOKEN_KEY",
        "EXPEDITE_ADMIN_GROUP",
        "EXPEDITE_MOUNT_ANCHOR",
        "EXPEDITE_LOG_LEVEL",
        "EXPEDITE_RELOAD_ON_LOGOUT",
    ] {
        println!("cargo:rerun-if-env-changed={key}");
    }
}
