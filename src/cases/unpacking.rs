use serde::Deserialize;
use serde_json::json;

use crate::{check_eq, example_case, CaseResult};

fn rectangle_area(height: u32, width: u32) -> u32 {
    height * width
}

fn one() -> u32 {
    1
}

/// Named arguments for [`rectangle_area`]; absent keys default to 1.
#[derive(Debug, Deserialize)]
struct RectangleArgs {
    #[serde(default = "one")]
    height: u32,
    #[serde(default = "one")]
    width: u32,
}

impl RectangleArgs {
    fn area(self) -> u32 {
        let RectangleArgs { height, width } = self;
        rectangle_area(height, width)
    }
}

/// Spreads an array's elements into positional arguments.
#[example_case(name = "rectangle area via positional unpacking", group = "unpacking")]
pub fn positional_unpacking() -> CaseResult {
    let rectangle = [2, 4];
    let [height, width] = rectangle;

    let actual = rectangle_area(height, width);
    check_eq!(actual, rectangle[0] * rectangle[1]);
    check_eq!(actual, 8);

    Ok(json!(actual))
}

/// Spreads a map's entries into named arguments.
#[example_case(name = "rectangle area via named unpacking", group = "unpacking")]
pub fn named_unpacking() -> CaseResult {
    let rectangle = json!({ "height": 2, "width": 4 });

    let actual = serde_json::from_value::<RectangleArgs>(rectangle)?.area();
    check_eq!(actual, 8);

    let partial = serde_json::from_value::<RectangleArgs>(json!({ "width": 4 }))?.area();
    check_eq!(partial, 4, "a missing height falls back to its default");

    Ok(json!(actual))
}

/// Splits a tuple into leading names and the remaining elements.
#[example_case(name = "tuple unpacking with rest", group = "unpacking")]
pub fn tuple_unpacking() -> CaseResult {
    let my_tuple = (1, 2, 3, 4);

    let (first, second, ..) = my_tuple;
    check_eq!(first, my_tuple.0);
    check_eq!(second, my_tuple.1);

    let [_, _, others @ ..] = <[i32; 4]>::from(my_tuple);
    check_eq!(others, [3, 4]);

    Ok(json!({ "first": first, "second": second, "others": others }))
}
