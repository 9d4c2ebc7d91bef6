use chrono::{NaiveDate, TimeDelta};
use stockplot::{
    plot_fourier, plot_fourier_with, plot_test_prediction, Canvas, CurveKind, Error,
    LabeledSeries, PredictionOptions, PriceFrame, DEFAULT_COMPONENTS,
};

// Helper: a daily series starting 2020-01-01
fn daily(name: &str, start_day: u32, values: &[f64]) -> LabeledSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, start_day).unwrap();
    LabeledSeries::from_dates(
        name,
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (start + TimeDelta::days(i as i64), v)),
    )
    .unwrap()
}

// Helper: a noisy trend with a slow cycle, length `n`
fn wavy(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            20.0 + 0.3 * t + 4.0 * (t * 0.4).sin() + if i % 2 == 0 { 1.5 } else { -1.5 }
        })
        .collect()
}

fn squared_error(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[test]
fn mse_over_single_shared_day() {
    let real = daily("real", 1, &[10.0, 12.0]);
    let predicted = daily("pred", 2, &[11.0]);
    let mut canvas = Canvas::new();
    let curves =
        plot_test_prediction(&mut canvas, &real, &predicted, PredictionOptions { mse: true })
            .unwrap();

    assert_eq!(curves.mse, Some(1.0));
    let notes: Vec<&str> = canvas.annotations().map(|c| c.label.as_str()).collect();
    assert_eq!(notes, vec!["MSE : 1.00"]);
}

#[test]
fn mse_ignores_samples_outside_the_intersection() {
    // Shared days 2020-01-03..05; values elsewhere are wildly off.
    let real = daily("real", 1, &[100.0, -50.0, 1.0, 2.0, 3.0]);
    let predicted = daily("pred", 3, &[2.0, 2.0, 5.0, 900.0, 900.0]);
    let mut canvas = Canvas::new();
    let curves =
        plot_test_prediction(&mut canvas, &real, &predicted, PredictionOptions { mse: true })
            .unwrap();
    let expected = (1.0 + 0.0 + 4.0) / 3.0;
    assert!((curves.mse.unwrap() - expected).abs() < 1e-12);

    // Swapping roles gives the same error.
    let mut other = Canvas::new();
    let swapped =
        plot_test_prediction(&mut other, &predicted, &real, PredictionOptions { mse: true })
            .unwrap();
    assert!((swapped.mse.unwrap() - expected).abs() < 1e-12);
}

#[test]
fn disjoint_series_skip_annotation_silently() {
    let real = daily("real", 1, &[1.0, 2.0]);
    let predicted = daily("pred", 10, &[3.0, 4.0]);
    let mut canvas = Canvas::new();
    let curves =
        plot_test_prediction(&mut canvas, &real, &predicted, PredictionOptions { mse: true })
            .unwrap();
    assert_eq!(curves.mse, None);
    assert_eq!(canvas.annotations().count(), 0);
    assert_eq!(canvas.curves().len(), 2);
}

#[test]
fn prediction_curves_are_styled_and_labelled() {
    let real = daily("real", 1, &[1.0, 2.0, 3.0]);
    let predicted = daily("pred", 2, &[2.5, 3.5]);
    let mut canvas = Canvas::new();
    let curves =
        plot_test_prediction(&mut canvas, &real, &predicted, PredictionOptions::default()).unwrap();

    assert_eq!(canvas.title(), "Predicted data above true data.");
    assert_eq!(canvas.x_label(), "Date");
    assert_eq!(canvas.y_label(), "Prices [$]");

    let [real_h, pred_h] = curves.handles();
    let real_curve = canvas.curve(real_h).unwrap();
    let pred_curve = canvas.curve(pred_h).unwrap();
    assert_eq!(real_curve.label, "Real data");
    assert_eq!(pred_curve.label, "Predicted data");
    assert!(!real_curve.look.is_dashed());
    assert!(pred_curve.look.is_dashed());
    assert_ne!(real_curve.look.color, pred_curve.look.color);
    assert_eq!(real_curve.values(), vec![1.0, 2.0, 3.0]);
    assert_eq!(pred_curve.timestamps(), predicted.index().to_vec());
}

#[test]
fn non_series_inputs_are_type_mismatches() {
    let real = daily("real", 1, &[1.0, 2.0]);
    let raw = vec![1.0, 2.0];
    let mut canvas = Canvas::new();

    let err = plot_test_prediction(&mut canvas, &real, &raw, PredictionOptions { mse: true })
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: "unlabeled values", .. }));

    let frame = PriceFrame::default();
    let err = plot_test_prediction(&mut canvas, &frame, &real, PredictionOptions { mse: true })
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: "price frame", .. }));

    let err = plot_test_prediction(&mut canvas, &raw, &real, PredictionOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: "unlabeled values", .. }));

    let err = plot_fourier(&mut canvas, &frame).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: "price frame", .. }));

    // A rejected input leaves the canvas untouched.
    assert!(canvas.curves().is_empty());
    assert!(canvas.title().is_empty());
    assert!(canvas.x_label().is_empty());
}

#[test]
fn fourier_draws_one_curve_per_component_then_reference() {
    let series = daily("close", 1, &wavy(30));
    let mut canvas = Canvas::new();
    let handles = plot_fourier(&mut canvas, &series).unwrap();

    assert_eq!(handles.len(), DEFAULT_COMPONENTS.len() + 1);
    assert_eq!(canvas.title(), "Fourier transform of stock prices.");
    assert_eq!(canvas.y_label(), "Price [$]");
    let labels: Vec<&str> = handles
        .iter()
        .map(|&h| canvas.curve(h).unwrap().label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Fourier transform with 3 components",
            "Fourier transform with 6 components",
            "Fourier transform with 9 components",
            "Fourier transform with 15 components",
            "Real",
        ]
    );

    let reference = canvas.curve(*handles.last().unwrap()).unwrap();
    assert_eq!(reference.values(), series.values().to_vec());
    assert!(!reference.look.is_dashed());
}

#[test]
fn fourier_curves_span_the_series_with_n_points() {
    let series = daily("close", 1, &wavy(30));
    let mut canvas = Canvas::new();
    let handles = plot_fourier(&mut canvas, &series).unwrap();

    for &h in &handles[..4] {
        let curve = canvas.curve(h).unwrap();
        assert_eq!(curve.kind, CurveKind::Line);
        assert!(curve.look.is_dashed());
        assert_eq!(curve.len(), 30);
        let ts = curve.timestamps();
        assert_eq!(ts.first().copied(), series.first_timestamp());
        assert_eq!(ts.last().copied(), series.last_timestamp());
        assert!(ts.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn fourier_curves_reach_the_last_year_of_long_history() {
    let yearly = LabeledSeries::from_dates(
        "close",
        (1700..=2020).map(|y| (NaiveDate::from_ymd_opt(y, 1, 1).unwrap(), (y % 7) as f64)),
    )
    .unwrap();
    let mut canvas = Canvas::new();
    let handles = plot_fourier(&mut canvas, &yearly).unwrap();

    for &h in &handles[..4] {
        let ts = canvas.curve(h).unwrap().timestamps();
        assert_eq!(ts.len(), 321);
        assert_eq!(ts.first().copied(), yearly.first_timestamp());
        assert_eq!(ts.last().copied(), yearly.last_timestamp());
    }
}

#[test]
fn more_components_track_the_series_more_closely() {
    let series = daily("close", 1, &wavy(30));
    let mut canvas = Canvas::new();
    let handles = plot_fourier(&mut canvas, &series).unwrap();

    let approx: Vec<Vec<f64>> = handles[..4]
        .iter()
        .map(|&h| canvas.curve(h).unwrap().values())
        .collect();
    for i in 0..approx.len() {
        for j in (i + 1)..approx.len() {
            assert_ne!(approx[i], approx[j], "curves {i} and {j} are identical");
        }
    }
    let err_k3 = squared_error(series.values(), &approx[0]);
    let err_k15 = squared_error(series.values(), &approx[3]);
    assert!(err_k15 < err_k3, "k=15 error {err_k15} not below k=3 error {err_k3}");
}

#[test]
fn short_series_keeps_whole_spectrum() {
    // n = 6 <= 2k for k = 3, so nothing is cleared and the series comes back.
    let values = [5.0, 7.0, 6.0, 9.0, 8.0, 10.0];
    let series = daily("close", 1, &values);
    let mut canvas = Canvas::new();
    let handles = plot_fourier_with(&mut canvas, &series, &[3, 0]).unwrap();

    for &h in &handles[..2] {
        let approx = canvas.curve(h).unwrap().values();
        assert_eq!(approx.len(), values.len());
        for (a, b) in approx.iter().zip(values.iter()) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }
}

#[test]
fn empty_series_fails_fourier() {
    let series = LabeledSeries::new("empty", Vec::new(), Vec::new()).unwrap();
    let mut canvas = Canvas::new();
    assert!(matches!(plot_fourier(&mut canvas, &series), Err(Error::EmptySeries)));
}

#[test]
fn repeated_calls_produce_identical_curves() {
    let series = daily("close", 1, &wavy(40));
    let predicted = daily("pred", 5, &wavy(20));

    let draw = || {
        let mut canvas = Canvas::new();
        plot_fourier(&mut canvas, &series).unwrap();
        let mut overlay = Canvas::new();
        plot_test_prediction(&mut overlay, &series, &predicted, PredictionOptions { mse: true })
            .unwrap();
        (canvas, overlay)
    };
    let (a, a_overlay) = draw();
    let (b, b_overlay) = draw();
    for (x, y) in a.curves().iter().zip(b.curves()) {
        assert_eq!(x.label, y.label);
        assert_eq!(x.points, y.points);
    }
    assert_eq!(a_overlay.legend_labels(), b_overlay.legend_labels());
    for (x, y) in a_overlay.curves().iter().zip(b_overlay.curves()) {
        assert_eq!(x.points, y.points);
    }
}
