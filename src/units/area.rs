quantity! {
    /// Area (base unit square nanometer, nm²).
    quantity: Area; "area";
    /// Area dimension
    dimension: Q<
        P2,  // length
        Z0,  // mass
        Z0,  // time
        Z0,  // charge
        Z0>; // temperature
    units {
        @square_nanometer: 1.0; "nm²", "square nanometer", "square nanometers";
    }
}
