use registration::RegistrationInput;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("meetup-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn register_args_fill_every_flow_field() {
    let cli = parse(&[
        "--base-url",
        "http://127.0.0.1:9000",
        "register",
        "--name",
        "A",
        "--email",
        "a@x.com",
        "--company",
        "C",
        "--role",
        "student",
    ]);
    let Command::Register(args) = cli.command else {
        panic!("expected register command");
    };
    let flow = args.into_flow();
    assert_eq!(flow.fields(), &RegistrationInput::new("A", "a@x.com", "C", "Student"));
}

#[test]
fn unknown_role_is_kept_as_free_text() {
    let args = RegisterArgs {
        name: "A".into(),
        email: "a@x.com".into(),
        company: "C".into(),
        role: "Community Organizer".into(),
    };
    assert_eq!(args.into_flow().fields().role, "Community Organizer");
}

#[test]
fn register_requires_all_fields() {
    let result = Cli::try_parse_from(["meetup-cli", "register", "--name", "A"]);
    assert!(result.is_err());
}

#[test]
fn backend_config_applies_base_url_and_timeout() {
    let cli = parse(&["--base-url", "https://meetup.example.com/", "--timeout-secs", "3", "health"]);
    let cfg = cli.backend_config().unwrap();
    assert_eq!(cfg.register_url(), "https://meetup.example.com/api/register");
    assert_eq!(cfg.request_timeout, Duration::from_secs(3));
}

#[test]
fn backend_config_rejects_non_http_url() {
    let cli = parse(&["--base-url", "localhost:8080", "roles"]);
    assert!(matches!(cli.backend_config(), Err(CliError::Config(_))));
}

#[test]
fn confirmation_lists_result_fields() {
    let result = RegistrationResult { input: RegistrationInput::new("A", "a@x.com", "C", "Student"), id: "abc123".into() };
    let text = render_confirmation(&result);
    assert!(text.starts_with("Registration successful!"));
    assert!(text.contains("Registration ID: abc123"));
    assert!(text.contains("Email:           a@x.com"));
}

#[test]
fn empty_table_has_placeholder_line() {
    assert_eq!(render_table(&[]), "no registrations yet");
}
