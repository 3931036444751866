// This file has code from https://github.com/LIHPC-Computational-Geometry/coupe
use num_traits::ToPrimitive;

/// Count the vertices assigned to each part of a given partition.
pub fn compute_part_sizes(partition: &[usize], num_parts: usize) -> Vec<usize> {
    let mut sizes = vec![0; num_parts];

    for &part in partition {
        if part < num_parts {
            sizes[part] += 1;
        }
    }

    sizes
}
/// Compute imbalance after passing part sizes.
pub fn compute_imbalance_from_part_sizes(num_parts: usize, part_sizes: &Vec<usize>) -> f64 {
    let total_size: usize = part_sizes.iter().cloned().sum();

    let ideal_part_size = total_size.to_f64().unwrap_or(0.0) / num_parts.to_f64().unwrap_or(1.0);
    if ideal_part_size == 0.0 {
        return 0.0;
    }

    let max_deviation = part_sizes
        .into_iter()
        .map(|part_size| {
            let part_size: f64 = part_size.to_f64().unwrap_or(0.0);
            (part_size - ideal_part_size) / ideal_part_size
        })
        .fold(0.0f64, |acc, dev| acc.max(dev));

    max_deviation
}
/// Compute the imbalance of the given partition.
pub fn imbalance(num_parts: usize, partition: &[usize]) -> f64 {
    if num_parts == 0 {
        return 0.0;
    }

    let part_sizes = compute_part_sizes(partition, num_parts);

    compute_imbalance_from_part_sizes(num_parts, &part_sizes)
}
