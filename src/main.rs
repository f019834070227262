use attrition::{find_dropouts_with, Column, DropoutReport, ScanStrategy, Table};

fn main() {
    tracing_subscriber::fmt::init();

    println!("== Case 1: 12 subjects, 6 visits ==");
    let t1 = build_study_table(12, 42);
    run_scan_checks(&t1, /*print_report=*/ true);

    println!("\n== Case 2: 5000 subjects, 6 visits ==");
    let t2 = build_study_table(5000, 123);
    run_scan_checks(&t2, /*print_report=*/ false);

    println!("\n== Case 3: no columns, 4 rows ==");
    let t3 = Table::new_unchecked(vec![], 4);
    run_scan_checks(&t3, /*print_report=*/ true);

    println!("\nAll demo checks passed ✅");
}

/* -------------------- Demo helpers -------------------- */

fn run_scan_checks(table: &Table, print_report: bool) {
    let nested = find_dropouts_with(table, ScanStrategy::Nested).expect("valid table");
    let rightmost = find_dropouts_with(table, ScanStrategy::Rightmost).expect("valid table");

    assert_eq!(nested, rightmost, "strategies disagree");
    assert_eq!(
        rightmost.len(),
        table.height(),
        "one report row per table row"
    );
    check_report_consistency(table, &rightmost);

    let dropped = rightmost.dropout().iter().filter(|&&d| d).count();
    println!("dropouts: {} of {} rows", dropped, rightmost.len());

    if print_report {
        println!("{}", rightmost);
    }
}

fn check_report_consistency(table: &Table, report: &DropoutReport) {
    for row in 0..report.len() {
        let flag = report.dropout()[row];
        let name = &report.dropout_col()[row];
        let index = report.dropout_index()[row];

        if flag {
            let index = index.expect("flagged row carries an index") as usize;
            assert!(index >= 1 && index <= table.width());
            let column = table.column(index - 1).expect("index points at a column");
            assert_eq!(name.as_deref(), Some(column.name()));
        } else {
            assert!(name.is_none() && index.is_none());
        }
    }
}

/* -------------------- Synthetic study generator -------------------- */

fn lcg(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state
}

fn build_study_table(subjects: usize, seed: u64) -> Table {
    const VISITS: usize = 6;
    let mut state = seed ^ 0x9E3779B97F4A7C15;

    let mut subject = Vec::with_capacity(subjects);
    let mut site = Vec::with_capacity(subjects);
    let mut visits: Vec<Vec<Option<f64>>> =
        (0..VISITS).map(|_| Vec::with_capacity(subjects)).collect();

    for s in 0..subjects {
        subject.push(Some(s as i64 + 1));
        site.push(Some(
            if lcg(&mut state) % 2 == 0 { "north" } else { "south" }.to_string(),
        ));

        // Subjects with last_visit >= VISITS complete the study.
        let last_visit = (lcg(&mut state) % 8) as usize;
        for (v, visit) in visits.iter_mut().enumerate() {
            if v < last_visit {
                let score = 50.0 + (lcg(&mut state) % 1000) as f64 / 10.0;
                visit.push(Some(score));
            } else {
                visit.push(None);
            }
        }
    }

    let mut columns = vec![
        Column::from_i64("subject", subject),
        Column::from_text("site", site),
        Column::unsupported("consent", "date", subjects),
    ];
    for (v, values) in visits.into_iter().enumerate() {
        columns.push(Column::from_f64(&format!("visit_{}", v + 1), values));
    }

    Table::new(columns).expect("equal column lengths by construction")
}
