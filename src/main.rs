use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    polypack::app::run()
}
