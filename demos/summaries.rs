use ferrite_zoo::{LayoutConvention, LeNet, MiniVGGNet, ShallowNet};

fn main() -> ferrite_zoo::Result<()> {
    let layout = LayoutConvention::ChannelsLast;

    let models = vec![
        ShallowNet::build(32, 32, 3, 3, layout)?,
        LeNet::build(28, 28, 1, 10, layout)?,
        MiniVGGNet::build(32, 32, 3, 10, layout)?,
    ];

    for model in &models {
        println!("{}", model.summary());
    }

    // Same network, other layout: shapes move, parameter counts do not.
    let first = MiniVGGNet::build(32, 32, 3, 10, LayoutConvention::ChannelsFirst)?;
    println!(
        "minivggnet channels_first input {} -> {} params",
        first.input_shape(),
        first.total_params()
    );
    Ok(())
}
