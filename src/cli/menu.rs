use std::io::{self, BufRead, Write};

use colored::*;
use tracing::{error, info};

use crate::config::{constant, Settings};
use crate::domain::transport::{Objective, TransportMode};
use crate::domain::types::{Coordinate, RouteReport};
use crate::fixtures::data_generator::generate_sample_file;
use crate::persistence::orders::load_orders;
use crate::solver::compare::{compare_all, ComparisonRow};
use crate::solver::run::run_optimization;

/// Interactive text menu. Generic over its input and output so it can be scripted.
pub struct Menu<R, W> {
    input: R,
    output: W,
    pub settings: Settings,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self { input, output, settings }
    }

    /// Loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("\nSelect menu option: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => {
                    if let Some(path) = self.input_non_empty("Enter path to orders CSV: ")? {
                        self.settings.orders_path = path;
                    }
                }
                "2" => {
                    if let Some(mode) = self.choose_mode()? {
                        self.settings.mode = mode;
                    }
                }
                "3" => {
                    if let Some(objective) = self.choose_objective()? {
                        self.settings.objective = objective;
                    }
                }
                "4" => {
                    if let Some(depot) = self.input_depot()? {
                        self.settings.depot = depot;
                    }
                }
                "5" => self.run_optimization()?,
                "6" => self.compare()?,
                "7" => self.generate_samples()?,
                "0" => {
                    writeln!(self.output, "Exiting CourierOptimizer.")?;
                    break;
                }
                _ => writeln!(self.output, "Unknown option, please try again.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let s = &self.settings;
        writeln!(self.output, "\n{}", "=== NordicExpress Courier Optimizer ===".bold().cyan())?;
        writeln!(self.output, "Current orders file: {}", s.orders_path)?;
        writeln!(self.output, "Transport mode:      {}", s.mode.key)?;
        writeln!(self.output, "Objective:           {}", s.objective)?;
        writeln!(self.output, "Depot coordinates:   {}", s.depot)?;
        writeln!(self.output, "---------------------------------------")?;
        writeln!(self.output, "1) Change orders file")?;
        writeln!(self.output, "2) Choose transport mode (car / bike / walk)")?;
        writeln!(self.output, "3) Choose objective (FASTEST / CHEAPEST / LOWEST_CO2)")?;
        writeln!(self.output, "4) Change depot coordinates")?;
        writeln!(self.output, "5) Run optimization")?;
        writeln!(self.output, "6) Compare all modes and objectives")?;
        writeln!(self.output, "7) Generate sample orders file")?;
        writeln!(self.output, "0) Exit")
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn input_non_empty(&mut self, text: &str) -> io::Result<Option<String>> {
        while let Some(value) = self.prompt(text)? {
            if !value.is_empty() {
                return Ok(Some(value));
            }
            writeln!(self.output, "Empty input, please try again.")?;
        }
        Ok(None)
    }

    fn input_float(&mut self, text: &str) -> io::Result<Option<f64>> {
        while let Some(value) = self.prompt(text)? {
            match value.parse::<f64>() {
                Ok(number) if number.is_finite() => return Ok(Some(number)),
                _ => writeln!(self.output, "Please enter a valid number (e.g., 59.91).")?,
            }
        }
        Ok(None)
    }

    fn input_depot(&mut self) -> io::Result<Option<Coordinate>> {
        writeln!(self.output, "\nChange depot coordinates:")?;
        loop {
            let Some(lat) = self.input_float("Latitude:  ")? else {
                return Ok(None);
            };
            let Some(lon) = self.input_float("Longitude: ")? else {
                return Ok(None);
            };
            match Coordinate::try_new(lat, lon) {
                Ok(depot) => return Ok(Some(depot)),
                Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
            }
        }
    }

    fn choose_mode(&mut self) -> io::Result<Option<TransportMode>> {
        writeln!(self.output, "\nChoose transport mode:")?;
        for (n, mode) in TransportMode::ALL.iter().enumerate() {
            writeln!(self.output, "{}) {}", n + 1, mode.key)?;
        }
        self.choose_from(&TransportMode::ALL)
    }

    fn choose_objective(&mut self) -> io::Result<Option<Objective>> {
        writeln!(self.output, "\nChoose optimization objective:")?;
        writeln!(self.output, "1) FASTEST    (minimize total time)")?;
        writeln!(self.output, "2) CHEAPEST   (minimize total cost)")?;
        writeln!(self.output, "3) LOWEST_CO2 (minimize total CO2)")?;
        self.choose_from(&Objective::ALL)
    }

    fn choose_from<T: Copy>(&mut self, options: &[T]) -> io::Result<Option<T>> {
        while let Some(choice) = self.prompt("> ")? {
            match choice.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(options[n - 1])),
                _ => writeln!(
                    self.output,
                    "Invalid choice, please enter a number from 1 to {}.",
                    options.len()
                )?,
            }
        }
        Ok(None)
    }

    fn run_optimization(&mut self) -> io::Result<()> {
        match run_optimization(&self.settings) {
            Ok(Some(report)) => self.print_summary(&report),
            Ok(None) => writeln!(self.output, "{}", "No valid route generated.".yellow()),
            Err(err) => {
                error!("Optimization failed: {}", err);
                writeln!(self.output, "{} {}", "Optimization failed:".red(), err)
            }
        }
    }

    fn print_summary(&mut self, report: &RouteReport) -> io::Result<()> {
        let s = &self.settings;
        let t = &report.totals;
        writeln!(self.output, "\n{}", "=== Route summary ===".bold().green())?;
        writeln!(self.output, "Transport mode: {}", s.mode.key)?;
        writeln!(self.output, "Objective:      {}", s.objective)?;
        writeln!(self.output, "Total distance: {:.2} km", t.distance_km)?;
        writeln!(self.output, "Total time:     {:.2} h", t.time_h)?;
        writeln!(self.output, "Total cost:     {:.2} NOK", t.cost_nok)?;
        writeln!(self.output, "Total CO2:      {:.2} g", t.co2_g)?;
        writeln!(self.output, "\nRoute CSV:  {}", s.route_path)?;
        writeln!(self.output, "Log file:   {}", s.log_path)?;
        writeln!(self.output, "Rejected:   {}", s.rejected_path)
    }

    fn compare(&mut self) -> io::Result<()> {
        let rows = load_orders(&self.settings.orders_path, &self.settings.rejected_path)
            .map_err(|err| err.to_string())
            .and_then(|loaded| compare_all(&loaded.stops, &self.settings).map_err(|err| err.to_string()));

        match rows {
            Ok(rows) => self.print_comparison(&rows),
            Err(err) => {
                error!("Comparison failed: {}", err);
                writeln!(self.output, "{} {}", "Comparison failed:".red(), err)
            }
        }
    }

    fn print_comparison(&mut self, rows: &[ComparisonRow]) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=== Mode / objective comparison ===".bold().green())?;
        writeln!(
            self.output,
            "{:<6} {:<11} {:>10} {:>8} {:>10} {:>10}  order",
            "mode", "objective", "dist km", "time h", "cost NOK", "CO2 g"
        )?;
        for row in rows {
            let order: Vec<String> = row.order.iter().map(|i| i.to_string()).collect();
            writeln!(
                self.output,
                "{:<6} {:<11} {:>10.2} {:>8.2} {:>10.2} {:>10.1}  {}",
                row.mode.key,
                row.objective.as_str(),
                row.totals.distance_km,
                row.totals.time_h,
                row.totals.cost_nok,
                row.totals.co2_g,
                order.join(" ")
            )?;
        }
        Ok(())
    }

    fn generate_samples(&mut self) -> io::Result<()> {
        let path = self.settings.orders_path.clone();
        match generate_sample_file(
            &path,
            constant::SAMPLE_ORDER_COUNT,
            self.settings.depot,
            constant::SEED,
        ) {
            Ok(orders) => {
                info!("Sample orders written to {}", path);
                writeln!(self.output, "Wrote {} sample orders to {}", orders.len(), path)
            }
            Err(err) => {
                error!("Sample generation failed: {}", err);
                writeln!(self.output, "{} {}", "Sample generation failed:".red(), err)
            }
        }
    }
}
