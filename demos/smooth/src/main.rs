use argh::FromArgs;
use std::path::PathBuf;

use smoothing::imgproc::filter::{self, KernelSizePolicy, SmoothingFilter};
use smoothing::imgproc::parallel::ExecutionStrategy;
use smoothing::io::{functional as F, png};

#[derive(FromArgs)]
/// Smooth an RGB image with an average or gaussian filter and save it as PNG
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// directory where the processed image is written
    #[argh(option, short = 'o', default = "PathBuf::from(\"media/processed\")")]
    output_dir: PathBuf,

    /// the algorithm to apply: average_smoothing or gaussian_smoothing
    #[argh(option, short = 'a', default = "String::from(\"average_smoothing\")")]
    algorithm: String,

    /// the kernel size policy: fixed or automatic
    #[argh(option, short = 'k', default = "String::from(\"automatic\")")]
    kernel: String,

    /// number of worker threads, defaults to the global pool
    #[argh(option)]
    threads: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // validate the options before touching the image
    let algorithm: SmoothingFilter = args.algorithm.parse()?;
    let policy: KernelSizePolicy = args.kernel.parse()?;
    let strategy = match args.threads {
        Some(n) => ExecutionStrategy::Fixed(n),
        None => ExecutionStrategy::default(),
    };

    // read the image
    let image = F::read_image_any_rgb8(&args.input)?;
    let kernel_size = policy.kernel_size(&image);

    log::info!(
        "Selected algorithm: {algorithm}, kernel size: {kernel_size} ({policy:?}), image: {}",
        image.size()
    );

    let processed = filter::smooth_with_strategy(&image, algorithm, kernel_size, strategy)?;

    std::fs::create_dir_all(&args.output_dir)?;
    let output_path = args
        .output_dir
        .join(png::processed_file_name(algorithm.output_stem()));
    png::write_image_png_rgb8(&output_path, &processed)?;

    log::info!("Processed image saved at: {}", output_path.display());
    println!("{}", output_path.display());

    Ok(())
}
