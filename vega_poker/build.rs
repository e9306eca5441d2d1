use std::{env, fs::File, io::BufWriter, io::Write, path::Path};

use vega_codegen::CactusLookup;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("cactus_phf.rs");
    let mut file = BufWriter::new(File::create(path).unwrap());

    let builder = CactusLookup::new();
    let unique_phf = builder.generate_unique_phf(3.0, 0.95);
    let flush_phf = builder.generate_flush_phf(2.5, 0.95);

    writeln!(
        &mut file,
        "static CACTUS_UNIQUE_PHF: crate::MiniPhf = {};\n",
        unique_phf
    )
    .unwrap();
    writeln!(
        &mut file,
        "static CACTUS_FLUSH_PHF: crate::MiniPhf = {};\n",
        flush_phf
    )
    .unwrap();
}
