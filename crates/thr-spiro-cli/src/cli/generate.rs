//! Preset and custom generation commands.

use tracing::debug;

use thr_spiro::{generate, CurveParameters, CustomRequest, Generator};

use super::common::{
    build_generator, flag_value, load_config, print_trajectory_json, OutputArgs,
};

pub fn cmd_preset(args: &[String], config_path: Option<&str>) -> Result<(), String> {
    let mut preset_name: Option<&str> = None;
    let mut output = OutputArgs::default();

    let mut i = 0;
    while i < args.len() {
        if !output.parse_flag(args, &mut i)? {
            let arg = args[i].as_str();
            if arg.starts_with('-') {
                return Err(format!("Unknown option for preset: {}", arg));
            }
            if preset_name.is_some() {
                return Err(format!("Unexpected argument: {}", arg));
            }
            preset_name = Some(arg);
        }
        i += 1;
    }

    let preset_name =
        preset_name.ok_or("preset name required (use 'presets' to list them)")?;

    let mut config = load_config(config_path)?;
    output.apply(&mut config);
    let generator = build_generator(config)?;

    let params = generator.catalog().resolve(preset_name).map_err(|e| e.to_string())?;
    let name = output.name.as_deref().unwrap_or(preset_name);
    emit(&generator, &params, name, output.json)
}

pub fn cmd_custom(args: &[String], config_path: Option<&str>) -> Result<(), String> {
    let mut curve: Option<&str> = None;
    let mut output = OutputArgs::default();
    let mut request = CustomRequest::default();

    let mut i = 0;
    while i < args.len() {
        if output.parse_flag(args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-R" => request.big_r = Some(flag_value(args, &mut i, "-R")?),
            "-r" => request.r = Some(flag_value(args, &mut i, "-r")?),
            "-d" => request.d = Some(flag_value(args, &mut i, "-d")?),
            "-n" => request.n = Some(flag_value(args, &mut i, "-n")?),
            "-a" => request.a = Some(flag_value(args, &mut i, "-a")?),
            "-b" => request.b = Some(flag_value(args, &mut i, "-b")?),
            "--delta" => request.delta = Some(flag_value(args, &mut i, "--delta")?),
            "--revolutions" => {
                request.revolutions = Some(flag_value(args, &mut i, "--revolutions")?)
            }
            "-p" | "--points" => request.num_points = Some(flag_value(args, &mut i, "--points")?),
            "--scale" => request.scale = Some(flag_value(args, &mut i, "--scale")?),
            "--offset" => request.center_offset = Some(flag_value(args, &mut i, "--offset")?),
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option for custom: {}", arg));
            }
            arg => {
                if curve.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                curve = Some(arg);
            }
        }
        i += 1;
    }

    let curve = curve.ok_or("curve type required: hypotrochoid, epitrochoid, rose or lissajous")?;
    request.curve_type = curve.to_string();

    let mut config = load_config(config_path)?;
    output.apply(&mut config);
    let generator = build_generator(config)?;

    let params = request
        .to_parameters(&generator.config().defaults)
        .map_err(|e| e.to_string())?;
    let name = match output.name.as_deref() {
        Some(name) => name.to_string(),
        None => params.curve_type().name().to_string(),
    };
    emit(&generator, &params, &name, output.json)
}

/// Print the points (`--json`), print the .thr text (`-o -`), or save them
/// under `name`.
fn emit(generator: &Generator, params: &CurveParameters, name: &str, json: bool) -> Result<(), String> {
    if json {
        debug!(curve = %params.curve_type(), "pass-through output, no file written");
        let trajectory = generate(params).map_err(|e| e.to_string())?;
        return print_trajectory_json(&trajectory);
    }

    if name == "-" {
        debug!(curve = %params.curve_type(), "writing .thr to stdout");
        let trajectory = generate(params).map_err(|e| e.to_string())?;
        print!("{}", generator.encode(&trajectory));
        return Ok(());
    }

    let saved = generator.generate_custom(params, name).map_err(|e| e.to_string())?;
    println!("Saved {} points to {}", saved.points, saved.path.display());
    Ok(())
}
