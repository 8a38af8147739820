use crate::run_probe;

#[test]
fn logs_provider_for_default_endpoint() {
    let output = run_probe(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Provider created successfully"), "{stdout}");
    assert!(stdout.contains("https://sepolia.infura.io/v3/YOUR_INFURA_PROJECT_ID"), "{stdout}");
}

#[test]
fn malformed_endpoint_is_logged_not_fatal() {
    let output = run_probe(&[("RPCPROBE_RPC_URL", "::not a url::")]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error creating provider: invalid endpoint `::not a url::`"), "{stdout}");
    assert!(!stdout.contains("Provider created successfully"), "{stdout}");
}

#[test]
fn unknown_network_is_logged_not_fatal() {
    let output = run_probe(&[("RPCPROBE_NETWORK", "kovan")]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error creating provider: unknown network `kovan`"), "{stdout}");
}

#[test]
fn builds_endpoint_from_environment() {
    let output = run_probe(&[("RPCPROBE_NETWORK", "mainnet"), ("INFURA_PROJECT_ID", "0123abcd")]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://mainnet.infura.io/v3/0123abcd"), "{stdout}");
}

#[test]
fn respects_log_filter() {
    let output = run_probe(&[("RUST_LOG", "off")]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
