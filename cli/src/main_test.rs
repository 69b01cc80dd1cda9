use super::*;

fn run_args(args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("crdr-cli").chain(args.iter().copied())).unwrap();
    run(cli)
}

#[test]
fn parse_attr_splits_on_first_equals() {
    let (name, value) = parse_attr("data-url=a=b").unwrap();
    assert_eq!(name, "data-url");
    assert_eq!(value, "a=b");
}

#[test]
fn parse_attr_bare_name_is_boolean() {
    assert_eq!(parse_attr("hidden").unwrap(), ("hidden", ""));
}

#[test]
fn parse_attr_rejects_empty_or_spaced_names() {
    assert!(matches!(parse_attr("=x"), Err(CliError::InvalidAttribute(_))));
    assert!(matches!(parse_attr("bad name=x"), Err(CliError::InvalidAttribute(_))));
}

#[test]
fn img_command_renders_alt() {
    let html = run_args(&["img", "--kind", "logo:Web", "--attr", "alt=CRDR"]).unwrap();
    assert!(html.starts_with("<crdr-img kind=\"logo:Web\" alt=\"CRDR\"><img src=\"data:image/png;base64,"));
    assert!(html.ends_with("alt=\"CRDR\"></crdr-img>"));
}

#[test]
fn img_command_with_unknown_kind_renders_empty_element() {
    let html = run_args(&["img", "--kind", "logo:Nope"]).unwrap();
    assert_eq!(html, "<crdr-img kind=\"logo:Nope\"></crdr-img>");
}

#[test]
fn links_command_renders_ten_anchors() {
    let html = run_args(&["links", "--classpass", "foo", "--uselabel"]).unwrap();
    assert_eq!(html.matches("<a href=").count(), 10);
    assert_eq!(html.matches("class=\"foo\"").count(), 10);
    assert!(html.contains("</crdr-img> www.crdrlabs.org</a>"));
}

#[test]
fn kinds_command_lists_builtins() {
    let out = run_args(&["kinds"]).unwrap();
    let kinds: Vec<&str> = out.lines().collect();
    assert_eq!(kinds.len(), 11);
    assert!(kinds.contains(&"logo:BlueSky"));
}

#[test]
fn descriptors_command_is_json_array() {
    let out = run_args(&["descriptors"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(10));
}

#[test]
fn missing_manifest_is_reported() {
    let err = run_args(&["--manifest", "/nonexistent/crdr-manifest.json", "kinds"]).unwrap_err();
    assert!(matches!(err, CliError::ReadManifest { .. }));
}
