const EMBEDDED: &[(&str, &str)] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    ),
    (
        "src/rules/default_rules.toml",
        include_str!("src/rules/default_rules.toml"),
    ),
    (
        "src/morphology/default_lexicon.toml",
        include_str!("src/morphology/default_lexicon.toml"),
    ),
];

fn main() {
    // Embedded defaults are parsed with `expect` at runtime, so reject bad
    // TOML here.
    for (path, content) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        if let Err(e) = content.parse::<toml::Value>() {
            panic!("{path} contains invalid TOML: {e}");
        }
    }
}
