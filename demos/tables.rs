use litemark::markdown_to_html;

fn main() {
    println!("Table handling in the restricted dialect\n");

    // Basic table with a separator row
    let test1 = "| Run | Rs  |\n|---|---|\n| 1   | 2.1 |";
    println!("Test 1: Basic table");
    println!("Input:\n{}\n", test1);
    println!("Output:\n{}\n", markdown_to_html(test1));

    // No separator row: the first row is still the header
    let test2 = "| Run | Rs |\n| 1 | 2.1 |";
    println!("Test 2: Header without separator");
    println!("Input:\n{}\n", test2);
    println!("Output:\n{}\n", markdown_to_html(test2));

    // Inline formatting inside cells
    let test3 = "| Name | Value |\n|---|---|\n| **flow** | `1.0` |";
    println!("Test 3: Formatted cells");
    println!("Input:\n{}\n", test3);
    println!("Output:\n{}\n", markdown_to_html(test3));

    // One dash-filled cell marks the whole row as a separator
    let test4 = "| A | B |\n| x |---| y |\n| 1 | 2 |";
    println!("Test 4: Lax separator window");
    println!("Input:\n{}\n", test4);
    println!("Output:\n{}\n", markdown_to_html(test4));

    // Ragged rows are kept as-is
    let test5 = "| A | B | C |\n|---|---|---|\n| 1 |";
    println!("Test 5: Ragged row");
    println!("Input:\n{}\n", test5);
    println!("Output:\n{}\n", markdown_to_html(test5));
}
