use galpot::{bench_kernels, build_model, NVec3, SetupConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// YAML model setup to load
    #[arg(short, default_value = "setup.yaml")]
    file_name: PathBuf,

    /// Run the kernel scaling benchmarks instead of evaluating a setup
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_setup_from_yaml(path: &PathBuf) -> Result<SetupConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: SetupConfig = serde_yaml::from_reader(reader)?;
    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_kernels();
        return Ok(());
    }

    let cfg = load_setup_from_yaml(&args.file_name)?;
    let model = build_model(&cfg)?;

    println!("# kernel: {:?}", model.kind());
    for (name, value) in model.parameters() {
        println!("# {name} = {value}");
    }

    let pos = cfg.positions();
    let mut phi = vec![0.0; pos.len()];
    let mut grad = vec![NVec3::zeros(); pos.len()];
    model.value(&pos, &mut phi)?;
    model.gradient(&pos, &mut grad)?;

    println!("x,y,z,phi,dphi_dx,dphi_dy,dphi_dz");
    for (p, (v, g)) in pos.iter().zip(phi.iter().zip(grad.iter())) {
        println!(
            "{},{},{},{},{},{},{}",
            p.x, p.y, p.z, v, g.x, g.y, g.z
        );
    }

    Ok(())
}
