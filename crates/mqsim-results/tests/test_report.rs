use std::fs;

use tempfile::TempDir;

use mqsim_results::report::{build_report, save_report};

fn test_data(file_name: &str) -> String {
    format!("test-data/{}", file_name)
}

#[test]
fn full_report_round_trip() {
    let results = [test_data("result_1.xml"), test_data("result_2.xml")];
    let rows = build_report(test_data("workload.xml"), &results).unwrap();

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.csv");
    save_report(&output, &rows).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Scenario_ID,Scenario_File,Type,Read_Percentage,Queue_Depth,Seed,\
         Trace_File,Percentage_To_Be_Executed,Device_Response_Time(us),\
         Avg_Read_Latency(ns),Avg_Write_Latency(ns),IOPS,IOPS_Read,IOPS_Write"
    );
    assert_eq!(
        lines[1],
        "1,result_1.xml,Synthetic,70,4,42,,,118,2540,8113,5000,3500,1500"
    );
    assert_eq!(
        lines[2],
        "2,result_2.xml,Trace,,,,traces/web_server.trace,100,,,,5000,,"
    );
}

#[test]
fn single_synthetic_scenario_report() {
    let results = [test_data("result_2.xml")];
    let rows = build_report(test_data("workload_single.xml"), &results).unwrap();

    assert_eq!(rows.len(), 1);

    let mut buf = Vec::new();
    mqsim_results::report::write_report(&mut buf, &rows).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(
        csv.lines().nth(1).unwrap(),
        "1,result_2.xml,Synthetic,70,4,42,,,,,,5000,,"
    );
}

#[test]
fn extra_result_files_produce_rows_without_scenario_columns() {
    let results = [test_data("result_1.xml"), test_data("result_2.xml")];
    let rows = build_report(test_data("workload_single.xml"), &results).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].scenario_id, Some(1));
    assert_eq!(rows[1].scenario_id, None);
    assert_eq!(rows[1].scenario_type, None);
    assert_eq!(rows[1].scenario_file, "result_2.xml");
}
