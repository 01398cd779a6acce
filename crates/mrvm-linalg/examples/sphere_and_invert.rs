use anyhow::Result;
use log::LevelFilter;

use mrvm_linalg::config::{load_config, LinalgConfig};
use mrvm_linalg::{Matrix, Vector};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MRVM_LOG", "warn,mrvm_linalg=info"))
        .init();

    // Optional: matrix file and JSON config from the command line
    let mut args = std::env::args().skip(1);
    let data_path = args.next();
    let config = match args.next() {
        Some(path) => load_config(path)?,
        None => LinalgConfig::default(),
    };

    // Tiny synthetic dataset: 6 samples, 3 features on very different scales
    let mut x = match data_path {
        Some(path) => config.read_matrix(path)?,
        None => Matrix::from_slice(
            &[
                1.0, 120.0, 0.01,
                2.0, 180.0, 0.03,
                3.0, 150.0, 0.02,
                4.0, 210.0, 0.05,
                5.0, 160.0, 0.04,
                6.0, 240.0, 0.06,
            ],
            6,
            3,
        )?,
    };

    println!("X shape: {:?}", x.shape());
    print!("{}", config.render(&x));

    config.sphere(&mut x)?;
    println!("Sphered X:");
    print!("{}", config.render(&x));

    // Gram matrix X^T X via the transpose-on-the-right multiply
    let xt = x.transpose();
    let mut gram = xt.multiply(&xt)?;
    // ridge term keeps the Gram matrix invertible
    gram.add(&Matrix::from_diagonal(&Vector::from_elem(gram.height(), 1e-3))?)?;

    let inverse = gram.invert()?;
    println!("(X^T X + 1e-3 I)^-1:");
    inverse.print();

    let check = gram.matmul(&inverse)?;
    println!("Check (should be identity):");
    check.print();

    Ok(())
}
