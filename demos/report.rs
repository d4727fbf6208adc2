use linear_equations::{document, Config, Workspace};
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut src = Vec::new();
    std::io::stdin().lock().read_to_end(&mut src)?;

    let doc = document::decode(&src)?;
    let workspace = Workspace::from_document(doc, Config::default());
    println!(
        "Solving {} equations in {} unknowns",
        workspace.equation_count().get(),
        workspace.equation_count().get()
    );

    let report = workspace.recompute();
    print!("{}", report);

    if !report.plot_points.is_empty() {
        println!("Plot");

        for point in &report.plot_points {
            println!("  {}: ({:.2}, {:.2})", point.equation, point.x(), point.y());
        }
    }

    Ok(())
}
