use anyhow::Result;

const INPUT_PATH: &str = "public/cm_viridis.png";
const OUTPUT_PATH: &str = "public/cm_transparent_viridis.png";

fn main() -> Result<()> {
    env_logger::init();
    log::info!("adding horizontal alpha gradient: {INPUT_PATH} -> {OUTPUT_PATH}");

    alpha_gradient::add_horizontal_alpha_gradient(INPUT_PATH, OUTPUT_PATH)?;
    Ok(())
}
