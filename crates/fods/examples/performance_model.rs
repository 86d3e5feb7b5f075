//! Example: Speedup/efficiency model for a parallel computation

use fods::prelude::*;

fn main() -> Result<()> {
    let problem_size_x = 100.0;
    let problem_size_y = 100.0;
    let calculation_time_per_cell = 10.0;
    let communication_time_per_cell = 200.0;

    let mut sheet = Spreadsheet::new();

    // Header row
    sheet.push_row([
        Cell::text("Number of CPUs"),
        Cell::text("Parallel Computing Time"),
        Cell::text("Sequential Computing Time"),
        Cell::text("Speedup"),
        Cell::text("Efficiency"),
    ]);

    let sequential = problem_size_x * problem_size_y * calculation_time_per_cell;

    for (i, cpus) in (4..7).enumerate() {
        let row = i as u32 + 2;
        let cpus = cpus as f64;
        let parallel =
            (problem_size_x / cpus) * problem_size_y * calculation_time_per_cell
                + communication_time_per_cell * cpus;

        let a = Address::new(1, row)?;
        let b = Address::new(2, row)?;
        let c = Address::new(3, row)?;
        let d = Address::new(4, row)?;

        sheet.push_row([
            Cell::value(cpus.to_string(), ValueType::Float).with_style(CellStyle::Input),
            Cell::value(parallel.to_string(), ValueType::Float).with_style(CellStyle::Calculated),
            Cell::value(sequential.to_string(), ValueType::Float).in_range("sequential"),
            Cell::expression(format!("{}/{}", c, b)),
            Cell::expression(format!("{}/{}", d, a)),
        ]);
    }

    // Total of the parallel computing times
    sheet.push_row([
        Cell::text("Total"),
        Cell::formula(
            "SUM",
            [range_reference(&Address::new(2, 2)?, &Address::new(2, 4)?)],
        ),
    ]);

    sheet.save("/tmp/performance-model.fods")?;
    println!("Created /tmp/performance-model.fods");

    Ok(())
}
