//! Logarithm tables
//!
//! The interval `[OFF, 2*OFF)` with `OFF = 0x1.69009p-1` is split into 128
//! subintervals by the top mantissa bits. Row `i` holds `1/c` for a point `c`
//! near the centre of subinterval `i`, and `-log(1/c)` in base e, 2 and 10.
//! The subinterval containing 1.0 uses `c = 1` so that `log(1) = 0` exactly.
//!
//! Columns are indexed with [`INVC`], [`LOGC`], [`LOG2C`] and [`LOG10C`].

#![allow(clippy::excessive_precision)]

/// Number of rows
pub const LOG_TABLE_LEN: usize = 128;

/// Bits of `OFF`, the bottom of the reduced interval
pub const LOG_OFF: u64 = 0x3fe6_9009_0000_0000;

/// Column of `1/c`
pub const INVC: usize = 0;

/// Column of `log(c)`
pub const LOGC: usize = 1;

/// Column of `log2(c)`
pub const LOG2C: usize = 2;

/// Column of `log10(c)`
pub const LOG10C: usize = 3;

/// `[invc, logc, log2c, log10c]` per subinterval
pub static LOG_TABLE: [[f64; 4]; LOG_TABLE_LEN] = [
    [1.4143560560333055, -0.3466743434376137, -0.5001453560808826, -0.15055875437238844],
    [1.4065849158222963, -0.3411647209769617, -0.49219665107972954, -0.14816595574035704],
    [1.3988987055955229, -0.3356852881981705, -0.484291500582883, -0.14578626832056824],
    [1.3912960406332493, -0.33023571605789953, -0.47642942988114745, -0.14341954921131486],
    [1.383775566155448, -0.32481568086312756, -0.46860997198420634, -0.14106565783450398],
    [1.376335956516974, -0.31942486415578114, -0.4608326674541762, -0.13872445588555155],
    [1.368975914428561, -0.3140629526004558, -0.45309706424362317, -0.13639580728462047],
    [1.361694170202681, -0.3087296378751323, -0.4454027175378989, -0.13407957812915913],
    [1.3544894810233437, -0.3034246165647909, -0.4377491896016591, -0.1317756366476987],
    [1.3473606302389545, -0.2981475900578331, -0.4301360496294314, -0.12948385315486974],
    [1.3403064266773865, -0.2928982644452213, -0.42256287360010497, -0.12720410000759905],
    [1.3333257039824575, -0.2876763504222533, -0.41502924413522047, -0.12493625156245082],
    [1.3264173199710323, -0.2824815631928864, -0.40753475036093956, -0.12268018413407529],
    [1.3195801560100098, -0.2773136223765349, -0.4000789877735816, -0.12043577595473125],
    [1.31281311641248, -0.2721722519172636, -0.3926615581086178, -0.11820290713484932],
    [1.3061151278523655, -0.26705717999530315, -0.38528206921301517, -0.11598145962460366],
    [1.299485138796889, -0.2619681389408172, -0.3779401349208279, -0.1137713171764613],
    [1.292922118956243, -0.2569048651498528, -0.3706353749319405, -0.11157236530868009],
    [1.2864250587498474, -0.2518670990024074, -0.36336741469386274, -0.10938449126972556],
    [1.2799929687886236, -0.24685458478255065, -0.35613588528649, -0.10720758400358019],
    [1.2736248793727198, -0.24186707060053622, -0.3489404233097344, -0.10504153411591712],
    [1.2673198400041576, -0.23690430831684833, -0.3417806707739471, -0.10288623384111388],
    [1.2610769189138809, -0.2319660534681219, -0.3346562749930436, -0.10074157701008002],
    [1.2548952026027165, -0.22705206519488433, -0.3275668884802572, -0.09860745901887565],
    [1.2487737953957707, -0.2221621061710635, -0.3205121688464407, -0.09648377679809725],
    [1.2427118190098017, -0.21729594253520992, -0.3134917787008405, -0.09437042878300778],
    [1.2367084121331349, -0.21245334382338626, -0.30650538555427725, -0.09226731488439097],
    [1.2307627300176942, -0.20763408290367197, -0.29955266172465544, -0.09017433646010706],
    [1.2248739440827456, -0.20283793591223961, -0.29263328424474144, -0.0880913962873311],
    [1.2190412415299632, -0.19806468219095708, -0.28574693477214236, -0.08601839853545393],
    [1.2132638249694392, -0.1933141042264707, -0.2788932995014215, -0.08395524873962631],
    [1.207540912056281, -0.18858598759073006, -0.27207206907829384, -0.08190185377492919],
    [1.201871735137443, -0.18388012088291114, -0.26528293851583906, -0.07985812183115122],
    [1.1962555409084608, -0.17919629567269957, -0.2585256071126761, -0.07782396238815698],
    [1.1906915900797654, -0.17453430644489712, -0.25179977837304773, -0.07579928619182999],
    [1.1851791570522656, -0.16989395054531164, -0.2451051599287559, -0.07378400523057281],
    [1.179717529601901, -0.16527502812789824, -0.2384414634629027, -0.07177803271235093],
    [1.1743060085728765, -0.1606773421031149, -0.2318084046353833, -0.06978128304226383],
    [1.168943907579302, -0.15610069808745966, -0.22520570301008336, -0.06779367180062923],
    [1.1636305527149688, -0.15154490435415843, -0.21863308198373663, -0.06581511572156709],
    [1.1583652822710047, -0.14700977178496913, -0.2120902687163932, -0.06384553267206845],
    [1.1531474464611606, -0.14249511382307556, -0.20557699406345947, -0.06188484163153749],
    [1.1479764071544893, -0.13800074642703902, -0.19909299250926454, -0.05993296267179295],
    [1.1428515376151829, -0.13352648802578013, -0.19263800210211252, -0.05798981693751693],
    [1.137772222249349, -0.12907215947456332, -0.18621176439078194, -0.05605532662713938],
    [1.132737856358509, -0.12463758401195732, -0.17981402436243238, -0.05412941497414603],
    [1.1277478458996135, -0.12022258721774601, -0.17344453038188304, -0.052212006228799505],
    [1.12280160725137, -0.11582699697176392, -0.16710303413222477, -0.05030302564026173],
    [1.1178985669866954, -0.11145064341363219, -0.16078929055673136, -0.04840239943910746],
    [1.1130381616511045, -0.10709335890337308, -0.15450305780203827, -0.046510054820219415],
    [1.1082198375468528, -0.10275497798287729, -0.14824409716255169, -0.04462591992605374],
    [1.1034430505226636, -0.09843533733820403, -0.14201217302605917, -0.042749923830267135],
    [1.098707265768869, -0.09413427576269279, -0.13580705282051103, -0.0408819965216965],
    [1.0940119576178038, -0.08985163412086332, -0.1296285069619391, -0.03902206888868088],
    [1.0893566093492955, -0.08558725531308668, -0.12347630880348774, -0.03717007270371832],
    [1.0847407130011002, -0.08134098424100616, -0.11735023458552692, -0.03532594060844834],
    [1.0801637691841364, -0.07711266777368829, -0.11125006338681828, -0.03348960609895154],
    [1.0756252869023775, -0.07290215471448769, -0.10517557707671135, -0.031661003511359136],
    [1.0711247833772666, -0.0687092957686066, -0.09912656026834178, -0.029840068007764297],
    [1.0666617838765182, -0.06453394351132968, -0.09310280027280383, -0.028026735562426647],
    [1.062235821547186, -0.0603759523569226, -0.08710408705428055, -0.026220942948265116],
    [1.0578464372528655, -0.05623517852817068, -0.08113021318609735, -0.024422627723628756],
    [1.0534931794149192, -0.0521114800265491, -0.07518097380768665, -0.022631728219341795],
    [1.0491756038576046, -0.04800471660300334, -0.069256166582433, -0.020848183526013767],
    [1.044893273656996, -0.043914749729328434, -0.06335559165638208, -0.01907193348160966],
    [1.0406457589935894, -0.039841442570129476, -0.057479051617788234, -0.017302918659272543],
    [1.03643263700849, -0.035784659955353654, -0.05162635145748659, -0.015541080355394359],
    [1.0322534916630777, -0.03174426835337453, -0.0457972985300619, -0.013786360577926586],
    [1.0281079136020534, -0.02772013584461855, -0.03999170251579958, -0.012038702034926373],
    [1.0239955000197754, -0.023712132095722014, -0.03420937538340217, -0.01029804812333306],
    [1.0199158545297857, -0.019720128334200327, -0.02845013135344475, -0.008564342917967168],
    [1.0158685870374489, -0.01574399732362466, -0.02271378686256241, -0.0068375311607497555],
    [1.0118533136156056, -0.0117836133392867, -0.01700016052834196, -0.005117558250133765],
    [1.0078696563831684, -0.00783885214434661, -0.01130907311491067, -0.0034043702307452054],
    [1.0039172433865702, -0.003909590966446772, -0.005640347499197048, -0.0016979137832266345],
    [1.0, 0.0, 0.0, 0.0],
    [0.9922396115736811, 0.0077906569392197, 0.011239542131479452, 0.0033834393191043933],
    [0.9846070636797879, 0.015512637521890152, 0.02238000522393898, 0.006737052875522228],
    [0.977091042257406, 0.02317544575638686, 0.03343510066313049, 0.010064968207646947],
    [0.9696888989996791, 0.030779981607970155, 0.04440612682447204, 0.013367576165425018],
    [0.9623980652474198, 0.03832712466510619, 0.05529435268588177, 0.01664525874927364],
    [0.9552160490172054, 0.04581773475001674, 0.06610101870861508, 0.01989838937523914],
    [0.9481404321615583, 0.0532526525065321, 0.07682733768535709, 0.02312733313029826],
    [0.941168867654411, 0.06063269996625133, 0.08747449555701921, 0.026332447018238437],
    [0.9342990769954549, 0.06795868109396352, 0.09804365219961572, 0.029514080196531203],
    [0.9275288477273431, 0.075231382313235, 0.10853594218252581, 0.03267257420459186],
    [0.9208560310600625, 0.0824515730130229, 0.11895247549938243, 0.03580826318379892],
    [0.9142785395971188, 0.08962000603612878, 0.12929433827276196, 0.03892147408962685],
    [0.907794345158478, 0.09673741815027033, 0.139562593433797, 0.04201252689622988],
    [0.9014014766954962, 0.1038045305025066, 0.1497582813777734, 0.0450817347937964],
    [0.8950980182933336, 0.1108220490577185, 0.15988242059672392, 0.04812940437897862],
    [0.8888821072566009, 0.117790665021811, 0.16993600828997982, 0.051155835838686894],
    [0.88275193227422, 0.12471105525027089, 0.17992002095359533, 0.05416132312752421],
    [0.8767057316597007, 0.13158388264268484, 0.18983541494951675, 0.0571461541391231],
    [0.8707417916632413, 0.13840979652379323, 0.19968312705532698, 0.06011061087163529],
    [0.8648584448522589, 0.14518943301162515, 0.20946407499535194, 0.06305496958761063],
    [0.8590540685571314, 0.15192341537323925, 0.2191791579538864, 0.06597950096849348],
    [0.8533270833791093, 0.15861235436856666, 0.228829257071254, 0.06888447026395164],
    [0.8476759517575168, 0.16525684858282938, 0.23841523592338626, 0.07177013743624401],
    [0.842099176593508, 0.17185748474798915, 0.24793794098557462, 0.07463675729982396],
    [0.8365952999277956, 0.17841483805365546, 0.2573982020810162, 0.07748457965636488],
    [0.8311629016698941, 0.18492947244786717, 0.2667968328147502, 0.08031384942538816],
    [0.8258005983765551, 0.1914019409281391, 0.2761346309935486, 0.08312480677066299],
    [0.8205070420771838, 0.1978327858231504, 0.2854123790323075, 0.08591768722254207],
    [0.8152809191441454, 0.2042225390654335, 0.2946308443474535, 0.08869272179638905],
    [0.810120949205969, 0.21057172245540612, 0.3037907797378616, 0.09145013710724594],
    [0.8050258841015648, 0.21688084791707313, 0.3128929237537549, 0.09419015548088323],
    [0.7999945068736558, 0.22315041774571387, 0.32193800105404197, 0.09691299506136902],
    [0.7950256307997219, 0.2293809248478526, 0.33092672275252094, 0.09961886991528689],
    [0.7901180984588351, 0.23557285297379918, 0.339859786753365, 0.10230799013272704],
    [0.7852707808328434, 0.24172667694303526, 0.34873787807628553, 0.10498056192517023],
    [0.7804825764404386, 0.24784286286270726, 0.3575616691717512, 0.10763678772037814],
    [0.7757524105027118, 0.25392186833947833, 0.36633182022662564, 0.11027686625439946],
    [0.7710792341388695, 0.25996414268498025, 0.3750489794605719, 0.11290099266079655],
    [0.7664620235908464, 0.26597012711509466, 0.3837137834135543, 0.11550935855719205],
    [0.7618997794756097, 0.2719402549432862, 0.39232685722475946, 0.11810215212923271],
    [0.7573915260640092, 0.27787495176819915, 0.4008888149032408, 0.12067955821206112],
    [0.7529363105850793, 0.28377463565571825, 0.4094002595905772, 0.12324175836938422],
    [0.7485332025547511, 0.28963971731569343, 0.41786178381583217, 0.1257889309702234],
    [0.7441812931279821, 0.2954706002735092, 0.4262739697430769, 0.1283212512634265],
    [0.7398796944733547, 0.3012676810366825, 0.43463738941173985, 0.13083889145002014],
    [0.7356275391692396, 0.30703134925665976, 0.44295260497003036, 0.13334202075347742],
    [0.7314239796206636, 0.3127619878859767, 0.4512201689016726, 0.13583080548797136],
    [0.7272681874960553, 0.31845997333094117, 0.45944062424618043, 0.1383054091246845],
    [0.7231593531830843, 0.3241256755999912, 0.46761450481289224, 0.14076599235623966],
    [0.7190966852628439, 0.32975945844787297, 0.4757423353889765, 0.14321271315931589],
    [0.7150794100016572, 0.33536167951578033, 0.48382463194161013, 0.1456457268555102],
    [0.7111067708598241, 0.3409326904675919, 0.49186190181452677, 0.14806518617050454],
];
