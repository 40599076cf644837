use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["--seed", "1"]);
    assert!(v["outcome"] == "loss" || v["outcome"] == "win");
    assert!(v["steps"].as_u64().unwrap() <= 100);
    assert!(v["sunk_cells"].as_u64().unwrap() <= 20);
    let visited = v["sunk_cells"].as_u64().unwrap()
        + v["pending_cells"].as_u64().unwrap()
        + v["miss_cells"].as_u64().unwrap();
    assert!(visited <= v["steps"].as_u64().unwrap());
}

#[test]
fn sim_binary_is_reproducible() {
    let args = ["--seed", "42", "--max-steps", "30", "--placement", "bounded"];
    let a = run_sim(&args);
    let b = run_sim(&args);
    assert_eq!(a, b);
    assert_eq!(a["steps"], 30);
    assert_eq!(a["outcome"], "loss");
}
