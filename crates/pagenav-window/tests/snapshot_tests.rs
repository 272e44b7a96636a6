//! Snapshot tests for the serialized link sequence.

use pagenav_window::generate;

#[test]
fn test_full_range_wire_shape() {
    let links = generate(2, 3).unwrap();

    insta::assert_json_snapshot!(links, @r###"
    [
      {
        "page": 1,
        "active": false,
        "disabled": false
      },
      {
        "page": 2,
        "active": true,
        "disabled": false
      },
      {
        "page": 3,
        "active": false,
        "disabled": false
      }
    ]
    "###);
}

#[test]
fn test_extended_range_wire_shape() {
    let links = generate(1, 11).unwrap();

    insta::assert_json_snapshot!(links, @r###"
    [
      {
        "page": 1,
        "active": true,
        "disabled": false
      },
      {
        "page": 2,
        "active": false,
        "disabled": false
      },
      {
        "page": 3,
        "active": false,
        "disabled": false
      },
      {
        "page": 4,
        "active": false,
        "disabled": false
      },
      {
        "page": 5,
        "active": false,
        "disabled": false
      },
      {
        "page": 6,
        "active": false,
        "disabled": false
      },
      {
        "page": 7,
        "active": false,
        "disabled": false
      },
      {
        "page": null,
        "active": false,
        "disabled": true
      },
      {
        "page": 10,
        "active": false,
        "disabled": false
      },
      {
        "page": 11,
        "active": false,
        "disabled": false
      }
    ]
    "###);
}
