use pageflow::units::*;

fn main() {
    pretty_env_logger::init();

    let tokens = [
        "12pt", "4.5mm", "1\"", "2p6", "0p8", "1.4em", "50%", "2fr", "0.25col", "80 perc", "wide",
    ];
    for token in tokens {
        match parse(token) {
            Ok(value) => println!(
                "{token:>8} -> {value:<8} = {:<10} = {}",
                value.render().to_string(),
                value.convert(UnitKind::MILLIMETER)
            ),
            Err(err) => println!("{token:>8} -> {err}"),
        }
    }

    // percentages and columns only mean something inside a parent
    let context = RenderContext::with_parent(Pt(420.0), Pt(595.0)).with_font_size(Pt(9.0));
    let column = col(1.0).with_base(perc(30.0).anchored(Axis::Horizontal).render_in(&context));
    for value in [
        perc(50.0).anchored(Axis::Horizontal),
        perc(50.0).anchored(Axis::Vertical),
        em(2.0),
        column,
        column.try_mul(3.0).expect("scaling by a number"),
    ] {
        println!("{value} in a 420x595 parent is {}", value.render_in(&context));
    }

    let width = pt(200.0).with_min(pica(12.0)).with_max(inch(4.0));
    for factor in [0.5, 1.0, 2.0] {
        let scaled = width.try_mul(factor).expect("scaling by a number");
        println!("{} x {factor} is clamped to {scaled}", width.raw());
    }

    match pt(12.0).try_add(perc(10.0)) {
        Ok(sum) => println!("12pt + 10% = {sum}"),
        Err(err) => println!("12pt + 10%: {err}"),
    }
    if let Ok(Quotient::Ratio(ratio)) = inch(1.0).try_div(pica(1.0)) {
        println!("one inch is {ratio} picas");
    }
}
