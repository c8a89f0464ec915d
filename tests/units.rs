use pageflow::units::{
    col, em, fr, inch, mm, perc, pica, pt, px, units, Axis, Quotient, RenderContext, UnitKind,
    UnitValue,
};
use pageflow::{Pt, UnitError};

#[test]
fn tokens_parse_to_their_kind() {
    assert_eq!("12pt".parse::<UnitValue>().unwrap(), pt(12.0));
    assert_eq!("2p6".parse::<UnitValue>().unwrap().kind(), UnitKind::PICA);
    assert_eq!("2p6".parse::<UnitValue>().unwrap().render(), Pt(30.0));
    assert_eq!("50%".parse::<UnitValue>().unwrap(), perc(50.0));
    assert_eq!("0.25col".parse::<UnitValue>().unwrap().kind(), UnitKind::COLUMN);
    assert!(matches!(
        "twelve".parse::<UnitValue>(),
        Err(UnitError::Parse(_))
    ));
}

#[test]
fn values_print_in_their_own_notation() {
    assert_eq!(format!("{}", pica(2.5)), "2p6");
    assert_eq!(format!("{}", inch(0.4)), "0.40\"");
    assert_eq!(format!("{}", mm(10.0)), "10mm");
    assert_eq!(format!("{}", perc(50.0)), "50%");
    // printed values parse back to the same value
    for value in [pt(12.5), mm(7.0), perc(33.0), em(1.5)] {
        assert_eq!(format!("{value}").parse::<UnitValue>().unwrap(), value);
    }
}

#[test]
fn relative_values_render_late() {
    let width = perc(50.0).anchored(Axis::Horizontal);
    assert_eq!(width.render(), Pt::ZERO);
    let context = RenderContext::with_parent(Pt(400.0), Pt(600.0));
    assert_eq!(width.render_in(&context), Pt(200.0));
    assert_eq!(
        perc(50.0).anchored(Axis::Vertical).render_in(&context),
        Pt(300.0)
    );

    assert_eq!(em(2.0).render_in(&context.with_font_size(Pt(10.0))), Pt(20.0));
    assert_eq!(fr(4.0).with_base(Pt(400.0)).render(), Pt(100.0));
    // two columns and the gutter between them
    assert_eq!(col(2.0).with_base(Pt(100.0)).render(), Pt(212.0));
    assert_eq!(
        col(2.0).with_base(Pt(100.0)).with_gutter(pt(20.0)).render(),
        Pt(220.0)
    );
}

#[test]
fn mixed_arithmetic() {
    let sum = pt(12.0).try_add(pica(1.0)).unwrap();
    assert_eq!(sum.kind(), UnitKind::POINT);
    assert_eq!(sum, pt(24.0));
    assert_eq!(pica(1.0), pt(12.0));
    assert_eq!(px(5.0), pt(5.0));

    assert_eq!(
        pt(10.0).try_add(perc(5.0)),
        Err(UnitError::IncompatibleUnits {
            lhs: UnitKind::POINT,
            rhs: UnitKind::PERCENT
        })
    );
    assert_eq!(
        pt(1.0).try_mul(pt(2.0)),
        Err(UnitError::InvalidUnitOperation {
            lhs: UnitKind::POINT,
            rhs: UnitKind::POINT
        })
    );
    assert_eq!(mm(10.0).try_div(mm(5.0)).unwrap(), Quotient::Ratio(2.0));
    assert_eq!(
        mm(10.0).try_div(0.0),
        Err(UnitError::DivisionByZero(UnitKind::MILLIMETER))
    );
}

#[test]
fn clamping_survives_arithmetic() {
    let bounded = pt(5.0).with_min(10.0).with_max(20.0);
    assert_eq!(bounded.value(), 10.0);
    assert_eq!(bounded.raw(), 5.0);

    let grown = bounded.try_mul(100.0).unwrap();
    assert_eq!(grown.value(), 20.0);
    assert_eq!(grown.render(), Pt(20.0));

    let shrunk = grown.try_sub(1000.0).unwrap();
    assert_eq!(shrunk.value(), 10.0);
}

#[test]
fn conversion_keeps_the_point_value() {
    let converted = units("10mm", Some(UnitKind::POINT)).unwrap();
    assert_eq!(converted.kind(), UnitKind::POINT);
    assert!(converted.render().approx_eq(Pt(28.346_472), 1e-9));

    let back = converted.convert(UnitKind::MILLIMETER);
    assert!((back.raw() - 10.0).abs() < 1e-9);
    assert_eq!(units(3.0, Some(UnitKind::PICA)).unwrap(), pica(3.0));
}
