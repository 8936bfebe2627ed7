use minisplits::prelude::*;
use minisplits::MiniSplitsError;
use minisplits::discretization::{encode, interval_index};
use polars::prelude::*;


/// Counts the reported steps.
#[derive(Default)]
struct Counter {
    phases: Vec<String>,
    steps: usize,
}


impl Progress for Counter {
    fn set(&mut self, label: &str, _total: usize) {
        self.phases.push(label.to_string());
    }


    fn step(&mut self) {
        self.steps += 1;
    }
}


// Three classes along `x`, with a little label noise.
// `z` is unrelated to the class and `color` is nominal.
fn synthetic() -> Sample {
    let header = Header::new(vec![
        Attribute::numeric("x"),
        Attribute::numeric("z"),
        Attribute::nominal_with_values("color", vec!["red", "green"]),
        Attribute::nominal_with_values("class", vec!["a", "b", "c"]),
    ]);
    let records = (0..60_usize)
        .map(|i| {
            let x = if i % 17 == 5 { f64::NAN } else { i as f64 * 0.5 };
            let z = ((i * 7) % 13) as f64;
            let color = (i % 2) as f64;
            let class = match i {
                0..=19 => 0.0,
                20..=39 => 1.0,
                _ => 2.0,
            };
            let class = if i % 11 == 3 { (class + 1.0) % 3.0 } else { class };
            vec![x, z, color, class]
        })
        .collect();
    Sample::new(header, records)
        .unwrap()
        .set_target("class")
        .unwrap()
}


fn single_attribute(values: &[f64], classes: &[&str]) -> Sample {
    let df = DataFrame::new(vec![Series::new("x", values)]).unwrap();
    let target = Series::new("class", classes);
    Sample::from_dataframe(df, target).unwrap()
}


fn all_methods() -> Vec<DiscretizationMethod> {
    vec![
        DiscretizationMethod::EqualWidth { intervals: 5 },
        DiscretizationMethod::EqualFrequency { intervals: 5 },
        DiscretizationMethod::one_rule(),
        DiscretizationMethod::EntropyMinStatic,
        DiscretizationMethod::EntropyMinDynamic,
        DiscretizationMethod::chi_merge(),
        DiscretizationMethod::MdGlobal,
        DiscretizationMethod::MdLocal,
    ]
}


fn training_values(sample: &Sample, attribute: usize) -> Vec<f64> {
    sample.records()
        .iter()
        .map(|record| record[attribute])
        .filter(|v| !v.is_nan())
        .collect()
}


#[test]
fn every_method_returns_strictly_increasing_cuts() {
    let sample = synthetic();
    for method in all_methods() {
        let discretization = Discretizer::new(method)
            .unwrap()
            .fit(&sample, &mut NoProgress)
            .unwrap();

        for attribute in [0, 1] {
            let cuts = discretization.cuts(attribute)
                .unwrap_or_else(|| panic!("{method}: no cuts for {attribute}"));
            assert!(
                cuts.windows(2).all(|w| w[0] < w[1]),
                "{method}: cuts {cuts:?} are not strictly increasing"
            );
        }
        // Nominal attributes are left as they are.
        assert!(discretization.cuts(2).is_none());
        assert!(discretization.cuts(3).is_none());
    }
}


#[test]
fn training_values_fall_into_an_interval() {
    let sample = synthetic();
    for method in all_methods() {
        let discretization = Discretizer::new(method)
            .unwrap()
            .fit(&sample, &mut NoProgress)
            .unwrap();
        for attribute in [0, 1] {
            let cuts = discretization.cuts(attribute).unwrap();
            for value in training_values(&sample, attribute) {
                let index = interval_index(value, cuts).unwrap();
                assert!(index <= cuts.len(), "{method}: {value} -> {index}");
            }
        }
    }
}


#[test]
fn missing_values_pass_through() {
    assert!(encode(f64::NAN, &[]).is_nan());
    assert!(encode(f64::NAN, &[1.0, 2.0, 3.0]).is_nan());

    let sample = synthetic();
    let discretization = Discretizer::new(DiscretizationMethod::EntropyMinStatic)
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    let record = discretization.transform(&[f64::NAN, 4.0, 1.0, 0.0]);
    assert!(record[0].is_nan());
    assert_eq!(record[2], 1.0);
    assert_eq!(record[3], 0.0);

    // A short record is padded to the header width.
    let record = discretization.transform(&[4.0]);
    assert_eq!(record.len(), sample.header().len());
    assert!(!record[0].is_nan());
    assert!(record[1..].iter().all(|v| v.is_nan()));
}


#[test]
fn encoded_training_values_match_the_cut_partition() {
    let sample = synthetic();
    // Methods cutting between adjacent values of the whole sample.
    let methods = [
        DiscretizationMethod::one_rule(),
        DiscretizationMethod::EntropyMinStatic,
        DiscretizationMethod::chi_merge(),
        DiscretizationMethod::MdGlobal,
    ];
    for method in methods {
        let discretization = Discretizer::new(method)
            .unwrap()
            .fit(&sample, &mut NoProgress)
            .unwrap();
        for attribute in [0, 1] {
            let cuts = discretization.cuts(attribute).unwrap();
            for value in training_values(&sample, attribute) {
                // Cuts lie strictly between two training values.
                assert!(cuts.iter().all(|&c| c != value));
                let below = cuts.iter().filter(|&&c| c < value).count();
                assert_eq!(encode(value, cuts), below as f64, "{method}");
            }
        }
    }
}


#[test]
fn chi_merge_merges_two_clusters_into_two_intervals() {
    let sample = single_attribute(
        &[1.0, 2.0, 3.0, 10.0, 11.0, 12.0],
        &["A", "A", "A", "B", "B", "B"],
    );
    let chi_merge = ChiMerge::new(0.001, 2).unwrap();
    assert_eq!(chi_merge.generate_cuts(0, &sample), vec![6.5]);

    let discretization = Discretizer::new(DiscretizationMethod::chi_merge())
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    assert_eq!(discretization.cuts(0), Some(&[6.5][..]));
}


#[test]
fn static_entropy_minimization_cuts_between_classes() {
    let sample = single_attribute(
        &[25.0, 35.0, 45.0, 23.0],
        &["no", "yes", "yes", "no"],
    );
    let cuts = EntropyMinStatic::new().generate_cuts(0, &sample);
    assert_eq!(cuts, vec![30.0]);
}


#[test]
fn joint_methods_cut_the_separating_attribute() {
    let header = Header::new(vec![
        Attribute::numeric("x"),
        Attribute::numeric("z"),
        Attribute::nominal_with_values("class", vec!["a", "b"]),
    ]);
    let records = (1..=8_usize)
        .map(|i| {
            let class = if i <= 4 { 0.0 } else { 1.0 };
            vec![i as f64, (i % 2) as f64, class]
        })
        .collect();
    let sample = Sample::new(header, records)
        .unwrap()
        .set_target("class")
        .unwrap();

    let methods = [
        DiscretizationMethod::EntropyMinDynamic,
        DiscretizationMethod::MdGlobal,
        DiscretizationMethod::MdLocal,
    ];
    for method in methods {
        let discretization = Discretizer::new(method)
            .unwrap()
            .fit(&sample, &mut NoProgress)
            .unwrap();
        assert_eq!(discretization.cuts(0), Some(&[4.5][..]), "{method}");
        assert_eq!(discretization.cuts(1), Some(&[][..]), "{method}");
    }
}


#[test]
fn one_rule_closes_intervals_at_min_frequency() {
    let values = (1..=12).map(|i| i as f64).collect::<Vec<_>>();
    let mut classes = vec!["a"; 6];
    classes.extend(vec!["b"; 6]);
    let sample = single_attribute(&values, &classes);

    let cuts = OneRule::new(6).unwrap().generate_cuts(0, &sample);
    assert_eq!(cuts, vec![6.5]);
}


#[test]
fn unsupervised_binning() {
    let values = (0..=10).map(|i| i as f64).collect::<Vec<_>>();
    let classes = vec!["a"; values.len()];
    let sample = single_attribute(&values, &classes);

    let cuts = EqualWidth::new(5).unwrap().generate_cuts(0, &sample);
    let expected = [2.0, 4.0, 6.0, 8.0];
    assert_eq!(cuts.len(), expected.len());
    for (cut, e) in cuts.iter().zip(expected) {
        assert!((cut - e).abs() < 1e-9, "{cut} != {e}");
    }

    let values = (1..=10).map(|i| i as f64).collect::<Vec<_>>();
    let classes = vec!["a"; values.len()];
    let sample = single_attribute(&values, &classes);
    let cuts = EqualFrequency::new(5).unwrap().generate_cuts(0, &sample);
    assert_eq!(cuts, vec![2.5, 4.5, 6.5, 8.5]);

    // A constant attribute is a single interval.
    let sample = single_attribute(&[3.0, 3.0, 3.0], &["a", "b", "a"]);
    assert!(EqualWidth::new(4).unwrap().generate_cuts(0, &sample).is_empty());
    assert!(EqualFrequency::new(4).unwrap().generate_cuts(0, &sample).is_empty());
}


#[test]
fn transformed_sample_has_interval_attributes() {
    let sample = synthetic();
    let discretization = Discretizer::new(DiscretizationMethod::EntropyMinStatic)
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    let discretized = discretization.transform_sample(&sample).unwrap();

    let header = discretized.header();
    assert_eq!(header, discretization.header());
    assert_eq!(header.decision_index(), Some(3));
    for attribute in [0, 1] {
        let n_cuts = discretization.cuts(attribute).unwrap().len();
        assert!(header[attribute].is_nominal());
        assert_eq!(header[attribute].n_values(), n_cuts + 1);
    }
    assert_eq!(header[2], sample.header()[2]);
    assert_eq!(discretized.decision_distribution(), sample.decision_distribution());

    for (raw, coded) in sample.records().iter().zip(discretized.records()) {
        assert_eq!(coded.len(), raw.len());
        if raw[0].is_nan() {
            assert!(coded[0].is_nan());
        } else {
            let cuts = discretization.cuts(0).unwrap();
            assert_eq!(coded[0], encode(raw[0], cuts));
        }
    }
}


#[test]
fn invalid_parameters_are_rejected() {
    let invalid = [
        DiscretizationMethod::EqualWidth { intervals: 1 },
        DiscretizationMethod::EqualFrequency { intervals: 0 },
        DiscretizationMethod::OneRule { min_frequency: 0 },
        DiscretizationMethod::ChiMerge { significance: 0.0, min_intervals: 2 },
        DiscretizationMethod::ChiMerge { significance: 1.5, min_intervals: 2 },
        DiscretizationMethod::ChiMerge { significance: 0.05, min_intervals: 1 },
    ];
    for method in invalid {
        assert!(
            matches!(
                Discretizer::new(method),
                Err(MiniSplitsError::InvalidParameter { .. })
            ),
            "{method} was accepted"
        );
    }
}


#[test]
fn supervised_methods_need_a_decision() {
    let header = Header::new(vec![Attribute::numeric("x")]);
    let sample = Sample::new(header, vec![vec![1.0], vec![2.0]]).unwrap();

    let result = Discretizer::new(DiscretizationMethod::EntropyMinStatic)
        .unwrap()
        .fit(&sample, &mut NoProgress);
    assert!(matches!(result, Err(MiniSplitsError::MissingTarget)));

    let result = Discretizer::new(DiscretizationMethod::EqualWidth { intervals: 2 })
        .unwrap()
        .fit(&sample, &mut NoProgress);
    assert!(result.is_ok());
}


#[test]
fn cancelled_runs_are_interrupted() {
    let sample = synthetic();
    let flag = CancelFlag::new();
    flag.cancel();

    for method in all_methods() {
        let mut progress = Interruptible::new(NoProgress, flag.clone());
        let result = Discretizer::new(method)
            .unwrap()
            .fit(&sample, &mut progress);
        assert!(
            matches!(result, Err(MiniSplitsError::Interrupted)),
            "{method} was not interrupted"
        );
    }
}


#[test]
fn progress_is_reported_per_attribute() {
    let sample = synthetic();

    let mut counter = Counter::default();
    Discretizer::new(DiscretizationMethod::EntropyMinStatic)
        .unwrap()
        .fit(&sample, &mut counter)
        .unwrap();
    assert_eq!(counter.phases.len(), 1);
    assert_eq!(counter.steps, 2);

    let mut counter = Counter::default();
    Discretizer::new(DiscretizationMethod::MdGlobal)
        .unwrap()
        .fit(&sample, &mut counter)
        .unwrap();
    assert_eq!(counter.steps, 1);
}


#[test]
fn discretization_survives_json() {
    let sample = synthetic();
    let discretization = Discretizer::new(DiscretizationMethod::chi_merge())
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    let json = discretization.to_json().unwrap();
    let restored = Discretization::from_json(&json).unwrap();
    assert_eq!(restored, discretization);

    let method = DiscretizationMethod::ChiMerge { significance: 0.1, min_intervals: 3 };
    let json = serde_json::to_string(&method).unwrap();
    let restored: DiscretizationMethod = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, method);
}


#[test]
fn cuts_must_be_increasing() {
    let sample = synthetic();
    let cuts = vec![Some(vec![2.0, 1.0]), None, None, None];
    let result = Discretization::from_cuts(sample.header(), cuts);
    assert!(matches!(result, Err(MiniSplitsError::InvalidParameter { .. })));

    let cuts = vec![None, None];
    let result = Discretization::from_cuts(sample.header(), cuts);
    assert!(matches!(result, Err(MiniSplitsError::HeaderMismatch { .. })));
}


#[test]
fn values_one_ulp_apart_are_separated() {
    let low = f64::from_bits(1.0_f64.to_bits() + 1);
    let high = f64::from_bits(low.to_bits() + 1);
    let values = [vec![low; 20], vec![high; 20]].concat();
    let classes = [vec!["a"; 20], vec!["b"; 20]].concat();
    let sample = single_attribute(&values, &classes);

    let methods = [
        DiscretizationMethod::one_rule(),
        DiscretizationMethod::EntropyMinStatic,
        DiscretizationMethod::EntropyMinDynamic,
        DiscretizationMethod::chi_merge(),
        DiscretizationMethod::MdGlobal,
        DiscretizationMethod::MdLocal,
    ];
    for method in methods {
        let discretization = Discretizer::new(method)
            .unwrap()
            .fit(&sample, &mut NoProgress)
            .unwrap();
        let cuts = discretization.cuts(0).unwrap();
        assert_eq!(cuts.len(), 1, "{method}");
        assert_eq!(encode(low, cuts), 0.0, "{method}");
        assert_eq!(encode(high, cuts), 1.0, "{method}");
    }
}
