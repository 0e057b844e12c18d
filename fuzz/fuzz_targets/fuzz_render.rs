#![no_main]

use libfuzzer_sys::fuzz_target;
use solq::{Group, Occur, RenderOptions, Term};

fuzz_target!(|input: (&str, &str, f32, i32)| {
    // Arbitrary field/value/modifier input must never panic the builder or
    // the renderer, whatever classification the value lands on.
    let (field, value, weight, distance) = input;

    let term = Term::new(field, value)
        .with_proximity(distance)
        .with_boost(weight);

    let group = Group::new().with_occur(Occur::Must).with_label(field);
    group.add_term(&term);

    let child = group.add_group().with_constant_score(weight);
    child.add_term(&Term::unfielded(value));

    let _ = group.to_string();
    let _ = group.pretty();
    let _ = group.render(&RenderOptions::pretty().with_labels(true));
    let _ = group.deep_clone().to_string();
});
