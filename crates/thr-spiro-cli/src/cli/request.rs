//! Request command: run one JSON request from a file or stdin.

use std::fs;
use std::io::{self, Read};

use thr_spiro::Request;

use super::common::{build_generator, load_config};

pub fn cmd_request(args: &[String], config_path: Option<&str>) -> Result<(), String> {
    let source = match args {
        [source] => source.as_str(),
        [] => return Err("request file required (use '-' for stdin)".to_string()),
        [_, extra, ..] => return Err(format!("Unexpected argument: {}", extra)),
    };

    let body = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(source).map_err(|e| format!("Failed to read {}: {}", source, e))?
    };

    let request = Request::from_json(&body).map_err(|e| e.to_string())?;
    let generator = build_generator(load_config(config_path)?)?;
    let response = request.execute(&generator).map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
