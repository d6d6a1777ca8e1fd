use clap::{value_t_or_exit, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use railnet::error::Error;
use railnet::graph_impl::{Edge, RouteGraph};
use std::fs::File;
use std::io::BufReader;
use std::process::exit;

fn main() {
    env_logger::init();

    let matches = App::new("railnet-cli")
        .about("Queries trips and distances in a rail network")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("network")
                .long("network")
                .takes_value(true)
                .required_unless("file")
                .help("Comma separated edge tokens, e.g. \"AB5, BC4, CD8\""),
        )
        .arg(
            Arg::with_name("file")
                .long("file")
                .takes_value(true)
                .conflicts_with("network")
                .help("JSON file holding a list of {from, to, weight} records"),
        )
        .subcommand(
            SubCommand::with_name("distance")
                .about("Total distance of a trip visiting the given stations in order")
                .arg(Arg::with_name("stations").required(true).multiple(true)),
        )
        .subcommand(
            SubCommand::with_name("shortest")
                .about("Distance of the shortest trip between two stations")
                .arg(Arg::with_name("from").required(true))
                .arg(Arg::with_name("to").required(true)),
        )
        .subcommand(
            SubCommand::with_name("trips")
                .about("Trips between two stations, bounded by stop count")
                .arg(Arg::with_name("from").required(true))
                .arg(Arg::with_name("to").required(true))
                .arg(
                    Arg::with_name("min-stops")
                        .long("min-stops")
                        .takes_value(true)
                        .default_value("1"),
                )
                .arg(
                    Arg::with_name("max-stops")
                        .long("max-stops")
                        .takes_value(true)
                        .default_value("10"),
                )
                .arg(
                    Arg::with_name("count")
                        .long("count")
                        .help("Print the number of matching trips instead of listing them"),
                ),
        )
        .subcommand(
            SubCommand::with_name("trips-by-distance")
                .about("Trips between two stations, bounded by total distance (exclusive)")
                .arg(Arg::with_name("from").required(true))
                .arg(Arg::with_name("to").required(true))
                .arg(
                    Arg::with_name("min-length")
                        .long("min-length")
                        .takes_value(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::with_name("max-length")
                        .long("max-length")
                        .takes_value(true)
                        .default_value("20"),
                )
                .arg(
                    Arg::with_name("count")
                        .long("count")
                        .help("Print the number of matching trips instead of listing them"),
                ),
        )
        .get_matches();

    let graph = load_network(&matches);
    info!(
        "Loaded network with {} stations and {} routes",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    match matches.subcommand() {
        ("distance", Some(query)) => {
            let trip: Vec<char> = query
                .values_of("stations")
                .unwrap()
                .map(station_id)
                .collect();
            report(graph.trip_distance(&trip));
        }
        ("shortest", Some(query)) => {
            let from = station_id(query.value_of("from").unwrap());
            let to = station_id(query.value_of("to").unwrap());
            report(graph.shortest_trip(from, to));
        }
        ("trips", Some(query)) => {
            let from = station_id(query.value_of("from").unwrap());
            let to = station_id(query.value_of("to").unwrap());
            let min_stops = value_t_or_exit!(query, "min-stops", usize);
            let max_stops = value_t_or_exit!(query, "max-stops", usize);

            if query.is_present("count") {
                println!("{}", graph.count_trips_by_stops(from, to, min_stops, max_stops));
            } else {
                match graph.find_trips_by_stops(from, to, min_stops, max_stops) {
                    Ok(trips) => print_trips(&trips),
                    Err(err) => fail(err),
                }
            }
        }
        ("trips-by-distance", Some(query)) => {
            let from = station_id(query.value_of("from").unwrap());
            let to = station_id(query.value_of("to").unwrap());
            let min_length = value_t_or_exit!(query, "min-length", u32);
            let max_length = value_t_or_exit!(query, "max-length", u32);

            if query.is_present("count") {
                println!(
                    "{}",
                    graph.count_trips_by_distance(from, to, min_length, max_length)
                );
            } else {
                match graph.find_trips_by_distance(from, to, min_length, max_length) {
                    Ok(trips) => print_trips(&trips),
                    Err(err) => fail(err),
                }
            }
        }
        _ => unreachable!(),
    }
}

fn load_network(matches: &ArgMatches) -> RouteGraph<char, u32> {
    if let Some(path) = matches.value_of("file") {
        let file = File::open(path).unwrap_or_else(|err| {
            eprintln!("cannot open {}: {}", path, err);
            exit(2)
        });
        let edges: Vec<Edge<char, u32>> = serde_json::from_reader(BufReader::new(file))
            .unwrap_or_else(|err| {
                eprintln!("cannot parse {}: {}", path, err);
                exit(2)
            });
        return RouteGraph::from_edges(edges);
    }

    let network = value_t_or_exit!(matches, "network", String);
    network.parse().unwrap_or_else(|err| {
        eprintln!("invalid network description: {}", err);
        exit(2)
    })
}

fn station_id(value: &str) -> char {
    let mut chars = value.chars();
    if let (Some(id), None) = (chars.next(), chars.next()) {
        return id;
    }
    eprintln!("station ids are single characters, got `{}`", value);
    exit(2)
}

fn report(result: Result<u32, Error>) {
    match result {
        Ok(distance) => println!("{}", distance),
        Err(err) => fail(err),
    }
}

fn fail(err: Error) -> ! {
    match err {
        Error::NoRoute => println!("NO SUCH ROUTE"),
        other => eprintln!("{}", other),
    }
    exit(1)
}

fn print_trips(trips: &[Vec<char>]) {
    for trip in trips {
        let stations: Vec<String> = trip.iter().map(char::to_string).collect();
        println!("{}", stations.join("-"));
    }
}
