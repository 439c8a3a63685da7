use apihash_resolver::*;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Clone, Debug, Eq, PartialEq, StructOpt)]
pub enum Command {
    /// Hash every name in a list and print the values
    Hash {
        #[structopt(flatten)]
        hash: HashCommand,
    },
    /// Scan an operand listing for immediates matching hashed names
    Scan {
        #[structopt(flatten)]
        scan: ScanCommand,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, StructOpt)]
pub struct HashCommand {
    /// File with one API name per line
    #[structopt(name = "input", long = "input", short = "i")]
    input: PathBuf,
    /// Name of the library exporting the APIs
    #[structopt(long = "lib")]
    lib: String,
}

#[derive(Clone, Debug, Eq, PartialEq, StructOpt)]
pub struct ScanCommand {
    /// Operand listing to scan, one '<address> <value>...' record per line
    #[structopt(name = "input", long = "input", short = "i")]
    input: PathBuf,
    /// File with one API name per line
    #[structopt(long = "names", short = "n")]
    names: PathBuf,
    /// Name of the library exporting the APIs
    #[structopt(long = "lib")]
    lib: String,
}

#[derive(Clone, Debug, Eq, PartialEq, StructOpt)]
pub struct Opts {
    #[structopt(subcommand)]
    cmd: Command,
}

impl HashCommand {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let names = load_api_names(&self.input)?;
        for name in &names {
            println!(
                "hash \"{}\", \"{}\" = {:#X}",
                self.lib,
                name,
                compute_hash(&self.lib, name)
            );
        }
        Ok(())
    }
}

impl ScanCommand {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let names = load_api_names(&self.names)?;
        assert!(
            !names.is_empty(),
            "No API names found in the name list. See scan --help"
        );
        let table = NameTable::build(&self.lib, names);
        let records = load_listing(&self.input)?;
        let report = MatchReport::new(scan_records(&table, &records));
        println!("API names hashed: {}", table.len());
        println!("{}", report);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::from_args();
    match opts.cmd {
        Command::Hash { hash } => hash.run(),
        Command::Scan { scan } => scan.run(),
    }
}
