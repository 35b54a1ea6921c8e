use masked_power_set::PowerSetView;

fn main() {
    let ps = PowerSetView::new(["a", "b", "c"]).expect("3 elements is within the limit");
    for subset in &ps {
        println!("{:#018b} {:?}", subset.mask(), subset);
    }
}
