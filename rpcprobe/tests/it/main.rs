//! Runs the `rpcprobe` binary end to end.

use std::process::{Command, Output};

mod cli;

/// Runs the probe binary with a clean environment plus `vars`.
pub fn run_probe(vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rpcprobe"));
    for var in ["RUST_LOG", "RPCPROBE_RPC_URL", "RPCPROBE_NETWORK", "INFURA_PROJECT_ID"] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd.envs(vars.iter().copied());
    cmd.output().expect("failed to run rpcprobe")
}
