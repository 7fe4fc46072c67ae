use std::fs;
use std::io::Write;

use sitecat::catalog::load_site_store;
use sitecat::writer::serialize_site_store;

const FIXTURE: &str = r#"{
    "sites": [
        {
            "handle": "local",
            "arch": "x86_64",
            "os": "LINUX",
            "directories": [
                {
                    "type": "shared-scratch",
                    "internal-mount-point": { "path": "/tmp/scratch", "total-size": "100G" },
                    "file-servers": [ { "url": "file:///tmp/scratch" } ]
                }
            ],
            "profiles": [
                { "namespace": "env", "key": "PEGASUS_HOME", "value": "/usr" }
            ]
        }
    ]
}"#;

#[test]
fn loads_a_description_file_and_serializes_it() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let store = load_site_store(file.path()).expect("failed to load fixture");
    assert_eq!(store.sites.len(), 1);

    let sink = serialize_site_store(&store, Vec::new()).unwrap();
    let output = String::from_utf8(sink).unwrap();
    assert_eq!(
        output,
        concat!(
            "<site handle=\"local\" arch=\"x86_64\" os=\"LINUX\">\n",
            "\t<directory path=\"/tmp/scratch\" type=\"shared-scratch\" total-size=\"100G\">\n",
            "\t\t<file-server operation=\"all\" url=\"file:///tmp/scratch\">\n",
            "\t\t</file-server>\n",
            "\t</directory>\n",
            "\t<profile namespace=\"env\" key=\"PEGASUS_HOME\">/usr</profile>\n",
            "</site>\n",
        )
    );
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-catalog.json");

    let err = load_site_store(&path).unwrap_err();
    assert!(err.to_string().contains("no-such-catalog.json"));
}

#[test]
fn malformed_description_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"sites\": [ { \"handle\": \"local\" } ] }")
        .unwrap();

    // arch and os are mandatory
    assert!(load_site_store(file.path()).is_err());
}

#[test]
fn description_round_trips_through_a_real_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, FIXTURE).unwrap();

    let store = load_site_store(&path).unwrap();
    assert_eq!(store.sites[0].directories[0].file_servers.len(), 1);
}
