use minisplits::prelude::*;
use minisplits::MiniSplitsError;
use polars::prelude::*;


// The buying example:
//
//   age | income | buys
//   ----+--------+-----
//    25 | low    | no
//    35 | high   | yes
//    45 | high   | yes
//    23 | low    | no
fn buyers() -> Sample {
    let age = Series::new("age", &[25.0, 35.0, 45.0, 23.0]);
    let income = Series::new("income", &["low", "high", "high", "low"]);
    let df = DataFrame::new(vec![age, income]).unwrap();
    let target = Series::new("buys", &["no", "yes", "yes", "no"]);
    Sample::from_dataframe(df, target).unwrap()
}


// Two classes split at `x = 50`, every 7th label flipped.
// `z` and `color` carry no information.
fn noisy(n_records: usize) -> Sample {
    let header = Header::new(vec![
        Attribute::numeric("x"),
        Attribute::numeric("z"),
        Attribute::nominal_with_values("color", vec!["red", "green", "blue"]),
        Attribute::nominal_with_values("class", vec!["a", "b"]),
    ]);
    let records = (0..n_records)
        .map(|i| {
            let x = ((i * 37) % 100) as f64;
            let z = ((i * 11) % 7) as f64;
            let color = (i % 3) as f64;
            let mut class = if x < 50.0 { 0.0 } else { 1.0 };
            if i % 7 == 0 { class = 1.0 - class; }
            vec![x, z, color, class]
        })
        .collect();
    Sample::new(header, records)
        .unwrap()
        .set_target("class")
        .unwrap()
}


fn unpruned(sample: &Sample) -> DecisionTreeClassifier {
    DecisionTreeBuilder::new(sample)
        .pruning(false)
        .build()
        .unwrap()
        .fit(sample, &mut NoProgress)
        .unwrap()
}


#[test]
fn buyers_are_split_on_age() {
    let sample = buyers();
    let f = unpruned(&sample);

    assert_eq!(f.depth(), 1);
    assert_eq!(f.n_leaves(), 2);
    assert_eq!(
        f.root().discrimination(),
        Some(&Discrimination::Numeric { attribute: 0, threshold: 30.0 })
    );

    for (i, record) in sample.records().iter().enumerate() {
        assert_eq!(f.classify(record), sample.decision(i));
    }
    assert_eq!(f.accuracy(&sample), 1.0);
}


#[test]
fn dump_shows_one_line_per_branch() {
    let sample = buyers();
    let f = unpruned(&sample);

    let dump = f.dump(0);
    let lines = dump.lines().collect::<Vec<_>>();
    assert_eq!(lines, vec!["age <= 30: no (2)", "age > 30: yes (2)"]);
    assert_eq!(format!("{f}"), dump);

    let indented = f.dump(1);
    assert!(indented.lines().all(|line| line.starts_with("|   ")));
}


#[test]
fn split_selection_is_deterministic() {
    let sample = noisy(60);
    let indices = (0..sample.len()).collect::<Vec<_>>();
    let provider = GainRatioProvider::new();

    let first = provider.select(&sample, &indices);
    assert!(first.is_some());
    for _ in 0..5 {
        assert_eq!(provider.select(&sample, &indices), first);
    }
}


#[test]
fn ties_go_to_the_smallest_attribute_index() {
    // `income` separates the classes as well as `age` does.
    let sample = buyers();
    let indices = (0..sample.len()).collect::<Vec<_>>();
    let test = GainRatioProvider::new().select(&sample, &indices);
    assert_eq!(test.map(|t| t.attribute()), Some(0));

    // The same table with `income` first.
    let income = Series::new("income", &["low", "high", "high", "low"]);
    let age = Series::new("age", &[25.0, 35.0, 45.0, 23.0]);
    let df = DataFrame::new(vec![income, age]).unwrap();
    let target = Series::new("buys", &["no", "yes", "yes", "no"]);
    let sample = Sample::from_dataframe(df, target).unwrap();
    let test = GainRatioProvider::new().select(&sample, &indices);
    assert_eq!(
        test,
        Some(Discrimination::Nominal { attribute: 0, n_values: 2 })
    );
}


#[test]
fn every_record_gets_a_training_label() {
    let sample = noisy(90);
    let f = unpruned(&sample);
    let n_classes = sample.header().n_classes();

    let queries = vec![
        vec![f64::NAN; 4],
        vec![f64::NAN, 3.0, 1.0, f64::NAN],
        vec![42.0, f64::NAN, 7.0, f64::NAN],
        vec![-1e9, 100.0, -2.0, f64::NAN],
        vec![1e9, 0.5, 0.5, f64::NAN],
    ];
    for query in queries {
        let y = f.classify(&query);
        assert!(matches!(y, Some(y) if y < n_classes), "{query:?} -> {y:?}");

        let scores = f.classify_with_distribution(&query);
        assert_eq!(scores.len(), n_classes);
        let total = scores.iter().sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9);
    }
}


#[test]
fn pruning_never_lowers_validation_accuracy() {
    let sample = noisy(120);
    let train = sample.subset(&(0..80).collect::<Vec<_>>());
    let validation = sample.subset(&(80..120).collect::<Vec<_>>());

    let full = unpruned(&train);
    let pruned = DecisionTreeBuilder::new(&train)
        .build()
        .unwrap()
        .fit_with_validation(&train, &validation, &mut NoProgress)
        .unwrap();

    assert!(pruned.accuracy(&validation) >= full.accuracy(&validation));
    assert!(pruned.n_nodes() <= full.n_nodes());
}


#[test]
fn held_out_pruning_is_reproducible() {
    let sample = noisy(90);
    let fit = |seed| {
        DecisionTreeBuilder::new(&sample)
            .seed(seed)
            .pruning_ratio(0.25)
            .build()
            .unwrap()
            .fit(&sample, &mut NoProgress)
            .unwrap()
    };
    assert_eq!(fit(7), fit(7));
}


#[test]
fn held_out_pruning_keeps_a_training_record() {
    let header = Header::new(vec![
        Attribute::numeric("x"),
        Attribute::nominal_with_values("class", vec!["a", "b"]),
    ]);
    let sample = Sample::new(header, vec![vec![3.0, 1.0]])
        .unwrap()
        .set_target("class")
        .unwrap();

    let f = DecisionTreeBuilder::new(&sample)
        .pruning_ratio(0.5)
        .build()
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    assert_eq!(f.classify(&[3.0, f64::NAN]), Some(1));
    assert_eq!(f.classify(&[f64::NAN, f64::NAN]), Some(1));
}


#[test]
fn values_one_ulp_apart_are_split() {
    let low = f64::from_bits(1.0_f64.to_bits() + 1);
    let high = f64::from_bits(low.to_bits() + 1);
    let header = Header::new(vec![
        Attribute::numeric("x"),
        Attribute::nominal_with_values("class", vec!["a", "b"]),
    ]);
    let sample = Sample::new(header, vec![vec![low, 0.0], vec![high, 1.0]])
        .unwrap()
        .set_target("class")
        .unwrap();

    let f = unpruned(&sample);
    assert_eq!(f.depth(), 1);
    assert_eq!(f.classify(&[low, f64::NAN]), Some(0));
    assert_eq!(f.classify(&[high, f64::NAN]), Some(1));
}


#[test]
fn depth_and_size_limits() {
    let sample = noisy(90);
    let f = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .max_depth(1)
        .build()
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    assert!(f.depth() <= 1);

    let f = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .min_split_size(sample.len() + 1)
        .build()
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    assert_eq!(f.n_nodes(), 1);
    assert_eq!(f.root().distribution(), &sample.decision_distribution()[..]);
}


#[test]
fn empty_sample_gives_no_decision() {
    let header = Header::new(vec![
        Attribute::numeric("x"),
        Attribute::nominal_with_values("class", vec!["a", "b"]),
    ]);
    let sample = Sample::new(header, Vec::new())
        .unwrap()
        .set_target("class")
        .unwrap();

    let f = DecisionTreeBuilder::new(&sample)
        .build()
        .unwrap()
        .fit(&sample, &mut NoProgress)
        .unwrap();
    assert_eq!(f.n_nodes(), 1);
    assert_eq!(f.classify(&[1.0, f64::NAN]), None);
    assert_eq!(f.classify_with_distribution(&[1.0, f64::NAN]), vec![0.0, 0.0]);
}


#[test]
fn invalid_options_are_rejected() {
    let sample = noisy(10);
    let is_invalid = |result: Result<DecisionTree, MiniSplitsError>| {
        matches!(result, Err(MiniSplitsError::InvalidParameter { .. }))
    };

    assert!(is_invalid(DecisionTreeBuilder::new(&sample).pruning_ratio(0.0).build()));
    assert!(is_invalid(DecisionTreeBuilder::new(&sample).pruning_ratio(1.0).build()));
    assert!(is_invalid(DecisionTreeBuilder::new(&sample).max_depth(0).build()));
    assert!(is_invalid(DecisionTreeBuilder::new(&sample).min_split_size(0).build()));

    let header = Header::new(vec![Attribute::numeric("x")]);
    let unlabeled = Sample::new(header, vec![vec![1.0]]).unwrap();
    let result = DecisionTreeBuilder::new(&unlabeled).build();
    assert!(matches!(result, Err(MiniSplitsError::MissingTarget)));
}


#[test]
fn cancelled_growth_is_interrupted() {
    let sample = noisy(60);
    let flag = CancelFlag::new();
    let mut progress = Interruptible::new(NoProgress, flag.clone());
    flag.cancel();

    let result = DecisionTreeBuilder::new(&sample)
        .build()
        .unwrap()
        .fit(&sample, &mut progress);
    assert!(matches!(result, Err(MiniSplitsError::Interrupted)));
}


#[test]
fn classifier_survives_json() {
    let sample = noisy(60);
    let f = unpruned(&sample);
    let json = f.to_json().unwrap();
    let restored = DecisionTreeClassifier::from_json(&json).unwrap();

    assert_eq!(restored, f);
    assert_eq!(restored.classify_all(&sample), f.classify_all(&sample));
}
