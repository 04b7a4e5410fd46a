use venn_rs::diagram::Diagram;
use venn_rs::{LabelOptions, Regions};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let groups = [(0..10).collect::<Vec<u32>>(), (5..15).collect(), (3..8).collect()];
    println!("groups = {:?}", groups);

    let regions = Regions::new(&groups)?;
    println!("universe = {} elements", regions.universe_len());

    for (key, count) in regions.iter() {
        let elements: Vec<_> = regions.region(key).collect();
        println!("{} -> {} {:?}", key, count, elements);
    }

    let options = LabelOptions {
        logic: true,
        number: true,
        percent: true,
    };
    let diagram = Diagram::from_regions(&regions, &options)?;
    for (name, color) in diagram.legend().names().iter().zip(diagram.legend().colors()) {
        println!("legend: {} = {}", name, color);
    }
    for (key, label) in diagram.labels() {
        println!("label[{}] = {:?}", key, label);
    }

    Ok(())
}
